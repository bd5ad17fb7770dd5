//! Show command implementation

use std::io::Write;
use std::path::Path;

use mr_blocks::{MarkerReplacer, MarkerSyntax, TextBuffer};
use mr_fs::io;

use crate::error::Result;

/// Run the show command
///
/// Prints the marker's contents. A region spanning at least one line, even an
/// empty one, is followed by one line terminator in the file's own style.
pub fn run_show(path: &Path, marker: &str, syntax: &MarkerSyntax) -> Result<()> {
    let buffer = TextBuffer::from(io::read_buffer(path)?);
    let region = MarkerReplacer::new(syntax.clone()).find(&buffer, marker)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(region.contents(buffer.as_bytes()))?;
    if region.has_trailing_terminator {
        stdout.write_all(region.line_ending.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}
