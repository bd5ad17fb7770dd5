//! Replace command implementation

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use mr_blocks::{MarkerReplacer, MarkerSyntax, TextBuffer};
use mr_fs::io;

use crate::cli::{Assignment, ContentSource};
use crate::error::Result;

/// Run the replace command
///
/// Applies every assignment in order. The file is only written when all of
/// them succeed.
pub fn run_replace(
    path: &Path,
    assignments: &[Assignment],
    syntax: &MarkerSyntax,
    write: bool,
) -> Result<()> {
    let mut buffer = TextBuffer::from(io::read_buffer(path)?);
    let replacer = MarkerReplacer::new(syntax.clone());

    for assignment in assignments {
        let content = load_content(&assignment.content)?;
        replacer.replace(&mut buffer, &assignment.marker, &content)?;
        tracing::debug!(marker = %assignment.marker, len = content.len(), "Replaced marker");
    }

    if write {
        io::write_atomic(path, buffer.as_bytes())?;
        eprintln!(
            "{} Updated {} marker(s) in {}",
            "OK".green().bold(),
            assignments.len(),
            path.display()
        );
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(buffer.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

fn load_content(source: &ContentSource) -> Result<Vec<u8>> {
    match source {
        ContentSource::Inline(text) => Ok(text.as_bytes().to_vec()),
        ContentSource::File(path) => Ok(io::read_buffer(path)?),
    }
}
