//! Single-pass marker scanner.
//!
//! Walks the buffer byte by byte, classifying each line as marker syntax or
//! ordinary text, and records where the requested marker's content starts and
//! ends. The scan stops as soon as both ends are known.

use std::mem;

use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::line_ending::LineEnding;
use crate::syntax::{Command, MAX_MARKER_NAME_LEN, MarkerSyntax, is_whitespace};

/// Location of a marker's content inside a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// First byte of the line after the begin marker.
    pub start: usize,
    /// One past the last content byte. Excludes the content's final line
    /// terminator when the content is non-empty.
    pub end: usize,
    /// Line-ending convention detected while scanning.
    pub line_ending: LineEnding,
    /// Whether a line terminator sits between `end` and the end marker line.
    pub has_trailing_terminator: bool,
}

impl Region {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The region's current content.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than `end`; pass the buffer that was
    /// scanned, unmodified since.
    pub fn contents<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        &bytes[self.start..self.end]
    }
}

/// Where the scanner is within the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// Still comparing against the prefix; `matched` bytes agreed so far.
    Prefix { matched: usize },
    /// Ordinary text, ignored until the next line.
    Text,
    /// Prefix matched; waiting for `{` or `}`.
    AwaitCommand,
    /// Command seen; waiting for the name token.
    BeforeName(Command),
    /// Accumulating the name token.
    InName(Command),
    /// Name finished; only whitespace may follow.
    AfterName(Command),
}

struct Scanner<'a> {
    bytes: &'a [u8],
    prefix: &'a [u8],
    marker: &'a [u8],
    line_ending: Option<LineEnding>,
    line: usize,
    column: usize,
    line_start: usize,
    state: LineState,
    name: Vec<u8>,
    name_column: usize,
    command_column: usize,
    start: Option<usize>,
    end: Option<(usize, bool)>,
}

impl<'a> Scanner<'a> {
    fn new(bytes: &'a [u8], prefix: &'a [u8], marker: &'a [u8]) -> Self {
        Self {
            bytes,
            prefix,
            marker,
            line_ending: None,
            line: 0,
            column: 0,
            line_start: 0,
            state: Self::initial_state(prefix),
            name: Vec::with_capacity(MAX_MARKER_NAME_LEN),
            name_column: 0,
            command_column: 0,
            start: None,
            end: None,
        }
    }

    fn initial_state(prefix: &[u8]) -> LineState {
        if prefix.is_empty() {
            LineState::AwaitCommand
        } else {
            LineState::Prefix { matched: 0 }
        }
    }

    fn run(mut self) -> Result<Region> {
        let bytes = self.bytes;
        for (index, &byte) in bytes.iter().enumerate() {
            if self.is_terminator(index) {
                self.finish_line(index + 1)?;
                if self.end.is_some() {
                    break;
                }
                self.line += 1;
                self.column = 0;
                self.line_start = index + 1;
                continue;
            }

            self.feed(byte)?;
            self.column += 1;
        }

        if self.end.is_none() {
            self.finish_line(bytes.len())?;
        }

        self.into_region()
    }

    /// Check for a line terminator at `index`, fixing the line-ending mode on
    /// the first `\n` seen.
    fn is_terminator(&mut self, index: usize) -> bool {
        match self.line_ending {
            Some(line_ending) => line_ending.terminates_at(self.bytes, index),
            None => match LineEnding::detect_at(self.bytes, index) {
                Some(line_ending) => {
                    info!(%line_ending, "Established line ending");
                    self.line_ending = Some(line_ending);
                    true
                }
                None => false,
            },
        }
    }

    fn feed(&mut self, byte: u8) -> Result<()> {
        let state = self.state;
        self.state = match state {
            LineState::Prefix { matched } => {
                if byte != self.prefix[matched] {
                    LineState::Text
                } else if matched + 1 == self.prefix.len() {
                    LineState::AwaitCommand
                } else {
                    LineState::Prefix {
                        matched: matched + 1,
                    }
                }
            }
            LineState::Text => LineState::Text,
            LineState::AwaitCommand if is_whitespace(byte) => LineState::AwaitCommand,
            LineState::AwaitCommand => match Command::from_byte(byte) {
                Some(command) => {
                    info!(line = self.line + 1, ?command, "Got marker command");
                    self.command_column = self.column;
                    LineState::BeforeName(command)
                }
                None => return Err(self.syntax_error("'{' or '}'", byte)),
            },
            LineState::BeforeName(command) if is_whitespace(byte) => {
                LineState::BeforeName(command)
            }
            LineState::BeforeName(command) => {
                self.name_column = self.column;
                self.push_name(byte)?;
                LineState::InName(command)
            }
            LineState::InName(command) if is_whitespace(byte) => LineState::AfterName(command),
            LineState::InName(command) => {
                self.push_name(byte)?;
                LineState::InName(command)
            }
            LineState::AfterName(command) if is_whitespace(byte) => {
                LineState::AfterName(command)
            }
            LineState::AfterName(_) => {
                return Err(self.syntax_error("end of line after marker name", byte));
            }
        };
        Ok(())
    }

    fn push_name(&mut self, byte: u8) -> Result<()> {
        if self.name.len() >= MAX_MARKER_NAME_LEN {
            return Err(Error::NameTooLong {
                line: self.line + 1,
                column: self.column + 1,
                max: MAX_MARKER_NAME_LEN,
            });
        }
        self.name.push(byte);
        Ok(())
    }

    fn syntax_error(&self, expected: &'static str, found: u8) -> Error {
        Error::Syntax {
            line: self.line + 1,
            column: self.column + 1,
            expected,
            found: char::from(found),
        }
    }

    /// Resolve the command on the line that just ended and reset per-line state.
    fn finish_line(&mut self, next_line_start: usize) -> Result<()> {
        let state = mem::replace(&mut self.state, Self::initial_state(self.prefix));
        let result = match state {
            LineState::Prefix { .. } | LineState::Text | LineState::AwaitCommand => Ok(()),
            LineState::BeforeName(Command::Begin) => {
                debug!(line = self.line + 1, "Ignoring begin marker without a name");
                Ok(())
            }
            LineState::BeforeName(Command::End) => Err(Error::UnexpectedEnd {
                line: self.line + 1,
                column: self.command_column + 1,
            }),
            LineState::InName(Command::Begin) | LineState::AfterName(Command::Begin) => {
                self.begin(next_line_start)
            }
            LineState::InName(Command::End) | LineState::AfterName(Command::End) => {
                self.close();
                Ok(())
            }
        };
        self.name.clear();
        result
    }

    fn begin(&mut self, next_line_start: usize) -> Result<()> {
        info!(
            line = self.line + 1,
            name = %String::from_utf8_lossy(&self.name),
            "Got marker begin"
        );
        if self.name != self.marker {
            return Ok(());
        }
        if self.start.is_some() {
            return Err(Error::NestedMarker {
                name: String::from_utf8_lossy(self.marker).into_owned(),
                line: self.line + 1,
                column: self.name_column + 1,
            });
        }
        self.start = Some(next_line_start);
        Ok(())
    }

    /// Any named end line closes the open target region; end lines seen while
    /// nothing is open are skipped.
    fn close(&mut self) {
        info!(
            line = self.line + 1,
            name = %String::from_utf8_lossy(&self.name),
            "Got marker end"
        );
        let Some(start) = self.start else {
            return;
        };
        let raw_end = self.line_start;
        let width = self.line_ending.unwrap_or_default().width();
        self.end = Some(if raw_end > start {
            (raw_end - width, true)
        } else {
            (raw_end, false)
        });
    }

    fn into_region(self) -> Result<Region> {
        let name = || String::from_utf8_lossy(self.marker).into_owned();
        let Some(start) = self.start else {
            return Err(Error::MarkerNotFound { name: name() });
        };
        let Some((end, has_trailing_terminator)) = self.end else {
            return Err(Error::UnterminatedMarker {
                name: name(),
                prefix: String::from_utf8_lossy(self.prefix).into_owned(),
            });
        };
        Ok(Region {
            start,
            end,
            line_ending: self.line_ending.unwrap_or_default(),
            has_trailing_terminator,
        })
    }
}

/// Locate the content of `marker` in `bytes`.
///
/// The buffer is only read. The first problem found aborts the scan and is
/// returned as the error.
pub fn find_region(
    bytes: &[u8],
    marker: impl AsRef<[u8]>,
    syntax: &MarkerSyntax,
) -> Result<Region> {
    let marker = marker.as_ref();
    let region = Scanner::new(bytes, syntax.prefix_bytes(), marker)
        .run()
        .inspect_err(|e| error!("{e}"))?;

    info!(start = region.start, end = region.end, "Resolved marker region");
    info!(
        contents = %String::from_utf8_lossy(region.contents(bytes)),
        "Marker contents"
    );
    Ok(region)
}
