use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

/// Placeholder text that reads as "no value", exactly like the empty string.
const NULL_PLACEHOLDER: &str = "null";

/// An entry on the evaluator's value stack.
///
/// AGEL keeps no numeric type between operations: every operand is text and
/// is converted to a decimal or a boolean by the operator that needs it.
/// Predicates and string functions push [`Value::Bool`] so that a result can
/// flow straight into `&&`, `||` or a ternary.
///
/// # Example
///
/// ```
/// use agel::Value;
///
/// assert_eq!(Value::from(true).to_string(), "true");
/// assert_eq!(Value::from("null").as_text(), "");
/// assert_eq!(Value::from("TRUE").as_bool(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Text operand or result.
    Text(String),

    /// Boolean result of a predicate or string function.
    Bool(bool),
}

impl Value {
    /// Text form of this value with the null placeholder read as empty.
    ///
    /// Both `""` and `"null"` yield `""`.
    pub fn as_text(&self) -> String {
        match self {
            Value::Text(s) if s == NULL_PLACEHOLDER => String::new(),
            Value::Text(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
        }
    }

    /// Whether this value represents "no value" (`""` or `"null"`).
    pub fn is_empty_text(&self) -> bool {
        match self {
            Value::Text(s) => s.is_empty() || s == NULL_PLACEHOLDER,
            Value::Bool(_) => false,
        }
    }

    /// Read this value as a boolean literal.
    ///
    /// Only `true` and `false` (ignoring ASCII case) are booleans; anything
    /// else returns `None`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Text(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Value::Text(s) if s.eq_ignore_ascii_case("false") => Some(false),
            Value::Text(_) => None,
        }
    }

    /// Read this value as a floating-point number, used by ordering
    /// comparisons and index arguments.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Text(_) => self.as_text().parse::<f64>().ok(),
            Value::Bool(_) => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
