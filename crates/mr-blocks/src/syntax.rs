//! Marker line syntax.
//!
//! ```text
//! <prefix><ws>*{<ws>*<name><ws>*
//! <prefix><ws>*}<ws>*<name><ws>*
//! ```

use serde::{Deserialize, Serialize};

/// Prefix every marker line starts with unless configured otherwise.
pub const DEFAULT_PREFIX: &str = "//!mr ";

/// Upper bound on the length of a marker name, in bytes.
pub const MAX_MARKER_NAME_LEN: usize = 255;

/// Marker keyword found after the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `{`
    Begin,
    /// `}`
    End,
}

impl Command {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'{' => Some(Self::Begin),
            b'}' => Some(Self::End),
            _ => None,
        }
    }
}

/// Configurable parts of the marker grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSyntax {
    /// Literal that must open every marker line.
    pub prefix: String,
}

impl MarkerSyntax {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix_bytes(&self) -> &[u8] {
        self.prefix.as_bytes()
    }
}

impl Default for MarkerSyntax {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

/// Whitespace as the marker grammar sees it.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
