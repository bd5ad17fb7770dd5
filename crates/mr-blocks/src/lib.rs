//! Marker region scanning and replacement.
//!
//! A marker is a named region of a text buffer bounded by two comment lines
//! that share a configurable prefix (`//!mr ` by default):
//!
//! ```text
//! //!mr {generated
//! fn answer() -> u32 { 42 }
//! //!mr }generated
//! ```
//!
//! [`replace_marker_contents`] locates the region in a single pass over the raw
//! bytes and rewrites the bytes strictly between the two marker lines in place.
//! Everything outside the region, including the buffer's line-ending
//! convention, is preserved byte for byte.
//!
//! ```
//! use mr_blocks::{TextBuffer, replace_marker_contents};
//!
//! let mut buffer = TextBuffer::from("a\n//!mr {test\n//!mr }test\nb\n");
//! replace_marker_contents(&mut buffer, "test", "X").unwrap();
//! assert_eq!(buffer.as_bytes(), b"a\n//!mr {test\nX\n//!mr }test\nb\n");
//! ```

pub mod buffer;
pub mod error;
pub mod line_ending;
pub mod replace;
pub mod scanner;
pub mod syntax;

pub use buffer::TextBuffer;
pub use error::{Error, Result};
pub use line_ending::LineEnding;
pub use replace::{MarkerReplacer, replace_marker_contents};
pub use scanner::{Region, find_region};
pub use syntax::{Command, DEFAULT_PREFIX, MAX_MARKER_NAME_LEN, MarkerSyntax};
