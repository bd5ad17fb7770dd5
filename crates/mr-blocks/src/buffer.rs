//! Growable byte buffer holding the text being edited.

use crate::error::{Error, Result};

/// An owned, growable byte buffer.
///
/// The logical length is the number of bytes in use and never exceeds the
/// capacity. Replacement only ever grows the capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    bytes: Vec<u8>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Grow the capacity by `additional` bytes past the current capacity.
    ///
    /// Reports allocation failure instead of aborting; the contents are left
    /// untouched either way.
    pub fn try_grow(&mut self, additional: usize) -> Result<()> {
        let spare = self.bytes.capacity() - self.bytes.len();
        self.bytes
            .try_reserve_exact(spare.saturating_add(additional))
            .map_err(|source| Error::Allocation {
                requested: additional,
                source,
            })
    }

    /// Replace `start..end` with `replacement` followed by `suffix`.
    ///
    /// The tail after `end` is shifted in place with an overlap-safe move.
    /// Capacity must already cover the new length.
    pub(crate) fn splice_in_place(
        &mut self,
        start: usize,
        end: usize,
        replacement: &[u8],
        suffix: &[u8],
    ) {
        let old_len = self.bytes.len();
        let inserted = replacement.len() + suffix.len();
        let new_end = start + inserted;

        if new_end > end {
            self.bytes.resize(old_len + (new_end - end), 0);
            self.bytes.copy_within(end..old_len, new_end);
        } else if new_end < end {
            self.bytes.copy_within(end..old_len, new_end);
            self.bytes.truncate(old_len - (end - new_end));
        }

        self.bytes[start..start + replacement.len()].copy_from_slice(replacement);
        self.bytes[start + replacement.len()..new_end].copy_from_slice(suffix);
    }
}

impl From<Vec<u8>> for TextBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for TextBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::from(text.as_bytes())
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::from(text.into_bytes())
    }
}

impl AsRef<[u8]> for TextBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
