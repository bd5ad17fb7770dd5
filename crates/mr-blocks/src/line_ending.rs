//! Line-ending detection.

use std::fmt;

/// The line terminator convention of a buffer.
///
/// A scan fixes it on the first `\n` it meets and never changes it afterwards,
/// so a buffer with mixed terminators is read consistently with whichever
/// style appears first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Detect the convention from the `\n` at `index`.
    ///
    /// Returns `None` if `bytes[index]` is not a `\n`.
    pub fn detect_at(bytes: &[u8], index: usize) -> Option<Self> {
        if bytes.get(index) != Some(&b'\n') {
            return None;
        }
        if index > 0 && bytes[index - 1] == b'\r' {
            Some(Self::CrLf)
        } else {
            Some(Self::Lf)
        }
    }

    /// Whether the byte at `index` completes a terminator of this style.
    ///
    /// In CRLF mode a bare `\n` is not a terminator.
    pub fn terminates_at(self, bytes: &[u8], index: usize) -> bool {
        match self {
            Self::Lf => bytes.get(index) == Some(&b'\n'),
            Self::CrLf => Self::detect_at(bytes, index) == Some(Self::CrLf),
        }
    }

    /// Width of the terminator in bytes.
    pub fn width(self) -> usize {
        self.as_bytes().len()
    }

    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Lf => b"\n",
            Self::CrLf => b"\r\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lf => f.write_str("LF"),
            Self::CrLf => f.write_str("CRLF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_lf() {
        assert_eq!(LineEnding::detect_at(b"a\nb", 1), Some(LineEnding::Lf));
        assert_eq!(LineEnding::detect_at(b"\n", 0), Some(LineEnding::Lf));
    }

    #[test]
    fn test_detect_crlf() {
        assert_eq!(LineEnding::detect_at(b"a\r\nb", 2), Some(LineEnding::CrLf));
    }

    #[test]
    fn test_detect_not_newline() {
        assert_eq!(LineEnding::detect_at(b"a\r\nb", 1), None);
        assert_eq!(LineEnding::detect_at(b"a", 5), None);
    }

    #[test]
    fn test_bare_lf_is_not_crlf_terminator() {
        assert!(!LineEnding::CrLf.terminates_at(b"a\nb", 1));
        assert!(LineEnding::Lf.terminates_at(b"a\r\nb", 2));
    }

    #[test]
    fn test_width_and_display() {
        assert_eq!(LineEnding::Lf.width(), 1);
        assert_eq!(LineEnding::CrLf.width(), 2);
        assert_eq!(LineEnding::CrLf.to_string(), "CRLF");
    }
}
