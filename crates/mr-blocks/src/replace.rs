//! In-place replacement of marker contents.

use tracing::{debug, error};

use crate::buffer::TextBuffer;
use crate::error::Result;
use crate::scanner::{Region, find_region};
use crate::syntax::MarkerSyntax;

/// Replaces marker contents using a given marker syntax.
#[derive(Debug, Clone, Default)]
pub struct MarkerReplacer {
    syntax: MarkerSyntax,
}

impl MarkerReplacer {
    pub fn new(syntax: MarkerSyntax) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> &MarkerSyntax {
        &self.syntax
    }

    /// Locate `marker` without modifying the buffer.
    pub fn find(&self, buffer: &TextBuffer, marker: impl AsRef<[u8]>) -> Result<Region> {
        find_region(buffer.as_bytes(), marker, &self.syntax)
    }

    /// Replace the contents of `marker` with `replacement`.
    ///
    /// On error the buffer is left exactly as it was.
    ///
    /// A region whose begin line is directly followed by its end line gets a
    /// line terminator appended after `replacement`, so the end marker stays on
    /// its own line. A non-empty region keeps its existing final terminator.
    pub fn replace(
        &self,
        buffer: &mut TextBuffer,
        marker: impl AsRef<[u8]>,
        replacement: impl AsRef<[u8]>,
    ) -> Result<()> {
        let replacement = replacement.as_ref();
        let region = self.find(buffer, marker)?;

        // Keyed on the terminator, not the length, so rewrites stay idempotent
        let terminator: &[u8] = if region.has_trailing_terminator {
            b""
        } else {
            region.line_ending.as_bytes()
        };

        let new_len = replacement.len() + terminator.len();
        if new_len > region.len() {
            buffer
                .try_grow(new_len - region.len())
                .inspect_err(|e| error!("{e}"))?;
        }

        debug!(
            start = region.start,
            end = region.end,
            old_len = region.len(),
            new_len,
            "Replacing marker contents"
        );
        buffer.splice_in_place(region.start, region.end, replacement, terminator);
        Ok(())
    }

    /// Apply several replacements in order, re-scanning for each one.
    ///
    /// Stops at the first failure; replacements made before it are kept.
    pub fn replace_all<M, C>(
        &self,
        buffer: &mut TextBuffer,
        replacements: impl IntoIterator<Item = (M, C)>,
    ) -> Result<usize>
    where
        M: AsRef<[u8]>,
        C: AsRef<[u8]>,
    {
        let mut applied = 0;
        for (marker, contents) in replacements {
            self.replace(buffer, marker, contents)?;
            applied += 1;
        }
        Ok(applied)
    }
}

/// Replace the contents of `marker` using the default marker syntax.
pub fn replace_marker_contents(
    buffer: &mut TextBuffer,
    marker: impl AsRef<[u8]>,
    replacement: impl AsRef<[u8]>,
) -> Result<()> {
    MarkerReplacer::default().replace(buffer, marker, replacement)
}
