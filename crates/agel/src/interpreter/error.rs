//! Error types for the AGEL interpreter.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::ParseError;

/// Errors that occur while loading a constants file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the constants file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

impl LoadError {
    /// Attach a file path to a parse error.
    pub fn from_parse_error(path: &Path, error: ParseError) -> Self {
        let (line, column) = error.position();
        LoadError::Parse {
            path: path.to_path_buf(),
            line,
            column,
            message: error.to_string(),
        }
    }
}

/// Raised when the operator table is misconfigured.
///
/// This can only happen while building a registry; a registry that exists is
/// always consistent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two behaviors claim the same symbol.
    #[error("duplicate operator symbol '{symbol}'")]
    DuplicateSymbol { symbol: String },
}

/// An error that occurred while evaluating an expression.
///
/// Every variant aborts the current top-level evaluation; no partial result
/// is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A `$CONSTANTS.NAME$` reference names a constant that does not exist.
    #[error("constant not found: '{name}'{}", format_suggestions(suggestions))]
    UnknownConstant {
        name: String,
        suggestions: Vec<String>,
    },

    /// An operand does not have the type the operator requires.
    #[error("operator '{symbol}' requires a {expected} operand, got '{value}'")]
    TypeMismatch {
        symbol: &'static str,
        expected: &'static str,
        value: String,
    },

    /// A variable-arity function was called with an unsupported number of
    /// parameters.
    #[error("function '{symbol}' expects {expected} parameters, got {got}")]
    Arity {
        symbol: &'static str,
        expected: &'static str,
        got: usize,
    },

    /// A non-numeric arithmetic operand or an unrecoverable division failure.
    #[error("arithmetic error in '{symbol}': {message}")]
    Arithmetic {
        symbol: &'static str,
        message: String,
    },

    /// A string index lies outside the target string.
    #[error("function '{symbol}' range {begin}..{end} is out of bounds for length {length}")]
    IndexOutOfBounds {
        symbol: &'static str,
        begin: i64,
        end: i64,
        length: usize,
    },

    /// An operator found fewer values on the stack than it consumes.
    #[error("operator '{symbol}' is missing an operand")]
    MissingOperand { symbol: &'static str },

    /// A `)` without a matching `(`.
    #[error("unbalanced parenthesis: ')' has no matching '('")]
    UnbalancedParenthesis,

    /// A logic expression produced no value at all.
    #[error("expression '{expression}' produced no value")]
    EmptyExpression { expression: String },

    /// A constant refers back to itself through its value.
    #[error("cyclic constant reference detected: {}", chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },

    /// Maximum resolution depth exceeded.
    #[error("maximum recursion depth exceeded")]
    MaxDepthExceeded,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Closest names to `target` among `available`, best match first.
///
/// Names within Levenshtein distance 1 (for targets of up to three
/// characters) or 2 (for longer targets) qualify; at most three are returned.
///
/// ```
/// use agel::compute_suggestions;
///
/// let names = vec!["RATE".to_string(), "PRICE".to_string()];
/// assert_eq!(compute_suggestions("PRIC", &names), vec!["PRICE"]);
/// ```
pub fn compute_suggestions(target: &str, available: &[String]) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };
    let mut candidates: Vec<(usize, &String)> = available
        .iter()
        .map(|name| (strsim::levenshtein(target, name), name))
        .filter(|(distance, name)| *distance <= max_distance && name.as_str() != target)
        .collect();
    candidates.sort();
    candidates
        .into_iter()
        .take(3)
        .map(|(_, name)| name.clone())
        .collect()
}
