//! Source locations for diagnostics

use serde::{Deserialize, Serialize};
use std::fmt;

/// The originating file name and line number of a declaration
///
/// Attached to symbols after creation so that later passes can emit
/// positioned diagnostics. Resolution logic never reads it.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct SourceLoc {
    /// Name of the source file
    pub file: String,
    /// One-based line number within the file
    pub line: u32,
}

impl SourceLoc {
    /// Creates a location from a file name and line number
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLoc {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}", self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_file_and_line() {
        let loc = SourceLoc::new("main.fen", 42);
        assert_eq!(loc.to_string(), "main.fen:42");
    }
}
