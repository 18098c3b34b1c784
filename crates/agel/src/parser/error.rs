//! Parse error types for AGEL constants files.

use thiserror::Error;

/// An error that occurred while parsing a constants file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// The same constant name is defined twice.
    #[error("duplicate constant '{name}' at line {line}")]
    DuplicateConstant { name: String, line: usize },
}

impl ParseError {
    /// Line and column (1-based) the error points at.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. } => (*line, *column),
            ParseError::DuplicateConstant { line, .. } => (*line, 1),
        }
    }
}
