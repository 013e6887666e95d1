//! Error types for log parsing

use thiserror::Error;

use crate::units::UnitError;

/// Errors that can occur while reading or assembling a log
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Missing required column '{column}'")]
    SchemaMismatch { column: String },

    #[error("Row {row}: malformed value '{raw}' in column '{column}': {reason}")]
    MalformedValue {
        row: usize,
        column: String,
        raw: String,
        reason: String,
    },

    #[error("Row {row}: required column '{column}' is blank")]
    MissingField { row: usize, column: String },

    #[error("Invalid unit configuration: {0}")]
    InvalidUnit(#[from] UnitError),

    #[error("Delimiter {0:?} is not a single ASCII character")]
    InvalidDelimiter(char),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ParseError {
    /// Data row number (1-based) for row-level errors
    pub fn row(&self) -> Option<usize> {
        match self {
            ParseError::MalformedValue { row, .. } | ParseError::MissingField { row, .. } => {
                Some(*row)
            }
            _ => None,
        }
    }

    /// Whether the error affects only one row
    pub fn is_row_error(&self) -> bool {
        self.row().is_some()
    }
}
