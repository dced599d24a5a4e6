//! Filename templating for exported cells.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How exported cells are named: `{prefix}-{index}.png`, where the index
/// counts up from `start` and is zero-padded to `digits` characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NamingScheme {
    /// Text before the dash.
    pub prefix: String,
    /// Number given to the first cell.
    pub start: u32,
    /// Minimum width of the number; longer numbers are never truncated.
    pub digits: usize,
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            prefix: "image".to_string(),
            start: 1,
            digits: 3,
        }
    }
}

impl NamingScheme {
    pub fn new(prefix: impl Into<String>, start: u32, digits: usize) -> Self {
        Self {
            prefix: prefix.into(),
            start,
            digits,
        }
    }

    /// Filename of the cell at `offset` in the crop list.
    pub fn filename(&self, offset: usize) -> String {
        let index = self.start as u64 + offset as u64;
        format!("{}-{:0width$}.png", self.prefix, index, width = self.digits)
    }

    /// Example filenames for a list of `count` cells, as shown next to the
    /// export form.
    ///
    /// Returns `None` when there is nothing to show (no cells, or no prefix).
    pub fn preview(&self, count: usize) -> Option<FilenamePreview> {
        if count == 0 || self.prefix.is_empty() {
            return None;
        }
        let shown = count.min(if count > 3 { 2 } else { 3 });
        let leading = (0..shown).map(|i| self.filename(i)).collect();
        let last = (count > 3).then(|| self.filename(count - 1));
        Some(FilenamePreview { leading, last })
    }
}

/// A short sample of export filenames.
///
/// Up to three names are listed in full; longer lists show the first two and
/// the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenamePreview {
    pub leading: Vec<String>,
    pub last: Option<String>,
}

impl fmt::Display for FilenamePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.leading.join(", "))?;
        if let Some(last) = &self.last {
            write!(f, ", ... {}", last)?;
        }
        Ok(())
    }
}
