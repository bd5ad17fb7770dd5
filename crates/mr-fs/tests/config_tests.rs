use mr_fs::{ConfigStore, Error};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct TestConfig {
    prefix: String,
}

#[rstest]
#[case::toml("mr.toml", "prefix = \"# mr \"")]
#[case::json("mr.json", r##"{"prefix": "# mr "}"##)]
#[case::yaml("mr.yaml", "prefix: \"# mr \"")]
#[case::yml_upper("MR.YML", "prefix: \"# mr \"")]
fn test_load_by_extension(#[case] file_name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(file_name);
    fs::write(&file_path, content).unwrap();

    let config: TestConfig = ConfigStore::new().load(&file_path).unwrap();
    assert_eq!(
        config,
        TestConfig {
            prefix: "# mr ".into()
        }
    );
}

#[test]
fn test_load_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("mr.ini");
    fs::write(&file_path, "prefix=x").unwrap();

    let err = ConfigStore::new().load::<TestConfig>(&file_path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == "ini"));
}

#[test]
fn test_load_invalid_toml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("mr.toml");
    fs::write(&file_path, "prefix = ").unwrap();

    let err = ConfigStore::new().load::<TestConfig>(&file_path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { ref format, .. } if format == "TOML"));
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("absent.toml");

    let err = ConfigStore::new().load::<TestConfig>(&file_path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
