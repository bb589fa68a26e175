//! Import errors

use std::fmt;

/// Why an export could not be imported. Any of these aborts the whole import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// A non-empty line did not have exactly seven tab-separated cells
    Format {
        /// 1-based line number among non-empty lines
        line: usize,
        cells: usize,
    },
    /// The duration cell was not an integer
    InvalidDuration { line: usize, value: String },
    /// Reading the export failed
    Io(String),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format { line, cells } => write!(
                f,
                "Line {} has {} cells, expected 7",
                line, cells
            ),
            Self::InvalidDuration { line, value } => {
                write!(f, "Line {} has an invalid duration: {:?}", line, value)
            }
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
