//! Command implementations for mr-cli

pub mod replace;
pub mod show;

pub use replace::run_replace;
pub use show::run_show;
