//! Shared AGEL operator tables used by both the tokenizer and the operator
//! registry.
//!
//! This crate centralizes operator symbols and priorities so that token
//! splitting and precedence handling cannot drift apart.

/// Canonical operator identifiers, one per registered symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorId {
    Plus,
    Minus,
    Multiply,
    Divide,
    IsEmpty,
    IsNotEmpty,
    StartsWith,
    EndsWith,
    Length,
    Substring,
    ParamSeparator,
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    And,
    Or,
    OptionPredicate,
    OptionResult,
    LeftParenthesis,
    RightParenthesis,
}

/// Behavior family an operator belongs to.
///
/// The evaluator only distinguishes [`OperatorKind::Function`] (a left
/// parenthesis fires the function beneath it); the other families exist for
/// diagnostics and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Arithmetic,
    Predicate,
    Option,
    Parenthesis,
    Function,
    Separator,
}

impl OperatorId {
    /// Every operator, in declaration order.
    pub const ALL: [OperatorId; 23] = [
        OperatorId::Plus,
        OperatorId::Minus,
        OperatorId::Multiply,
        OperatorId::Divide,
        OperatorId::IsEmpty,
        OperatorId::IsNotEmpty,
        OperatorId::StartsWith,
        OperatorId::EndsWith,
        OperatorId::Length,
        OperatorId::Substring,
        OperatorId::ParamSeparator,
        OperatorId::Equal,
        OperatorId::NotEqual,
        OperatorId::Greater,
        OperatorId::Less,
        OperatorId::GreaterEqual,
        OperatorId::LessEqual,
        OperatorId::And,
        OperatorId::Or,
        OperatorId::OptionPredicate,
        OperatorId::OptionResult,
        OperatorId::LeftParenthesis,
        OperatorId::RightParenthesis,
    ];

    /// The textual symbol matched against tokens. Case-sensitive.
    pub const fn symbol(self) -> &'static str {
        match self {
            OperatorId::Plus => "+",
            OperatorId::Minus => "-",
            OperatorId::Multiply => "*",
            OperatorId::Divide => "/",
            OperatorId::IsEmpty => "isEmpty",
            OperatorId::IsNotEmpty => "isNotEmpty",
            OperatorId::StartsWith => "startsWith",
            OperatorId::EndsWith => "endsWith",
            OperatorId::Length => "length",
            OperatorId::Substring => "substring",
            OperatorId::ParamSeparator => ",",
            OperatorId::Equal => "==",
            OperatorId::NotEqual => "!=",
            OperatorId::Greater => ">",
            OperatorId::Less => "<",
            OperatorId::GreaterEqual => ">=",
            OperatorId::LessEqual => "<=",
            OperatorId::And => "&&",
            OperatorId::Or => "||",
            OperatorId::OptionPredicate => "?",
            OperatorId::OptionResult => ":",
            OperatorId::LeftParenthesis => "(",
            OperatorId::RightParenthesis => ")",
        }
    }

    /// Precedence used by the shunting-yard loop.
    ///
    /// Parentheses outrank everything so the precedence loop never reduces
    /// them; only right-parenthesis handling consumes a left parenthesis.
    pub const fn priority(self) -> u8 {
        match self.kind() {
            OperatorKind::Separator => 0,
            OperatorKind::Option => 1,
            OperatorKind::Predicate => match self {
                OperatorId::And | OperatorId::Or => 2,
                _ => 3,
            },
            OperatorKind::Arithmetic => match self {
                OperatorId::Plus | OperatorId::Minus => 4,
                _ => 5,
            },
            OperatorKind::Function => 6,
            OperatorKind::Parenthesis => 7,
        }
    }

    /// Behavior family of this operator.
    pub const fn kind(self) -> OperatorKind {
        match self {
            OperatorId::Plus | OperatorId::Minus | OperatorId::Multiply | OperatorId::Divide => {
                OperatorKind::Arithmetic
            }
            OperatorId::IsEmpty
            | OperatorId::IsNotEmpty
            | OperatorId::StartsWith
            | OperatorId::EndsWith
            | OperatorId::Length
            | OperatorId::Substring => OperatorKind::Function,
            OperatorId::ParamSeparator => OperatorKind::Separator,
            OperatorId::Equal
            | OperatorId::NotEqual
            | OperatorId::Greater
            | OperatorId::Less
            | OperatorId::GreaterEqual
            | OperatorId::LessEqual
            | OperatorId::And
            | OperatorId::Or => OperatorKind::Predicate,
            OperatorId::OptionPredicate | OperatorId::OptionResult => OperatorKind::Option,
            OperatorId::LeftParenthesis | OperatorId::RightParenthesis => {
                OperatorKind::Parenthesis
            }
        }
    }
}

/// Resolve a token to its operator id.
///
/// Matching is exact: `Substring` or `substring ` are not operators.
pub fn resolve_operator(symbol: &str) -> Option<OperatorId> {
    OperatorId::ALL.into_iter().find(|id| id.symbol() == symbol)
}

/// Whether `c` splits a whitespace-free chunk into separate tokens.
///
/// Only the parentheses and the parameter separator are single-character
/// delimiters; every other operator must be surrounded by whitespace or
/// delimiters to be recognized.
pub fn is_token_delimiter(c: char) -> bool {
    [
        OperatorId::LeftParenthesis,
        OperatorId::RightParenthesis,
        OperatorId::ParamSeparator,
    ]
    .into_iter()
    .any(|id| id.symbol().starts_with(c) && id.symbol().len() == c.len_utf8())
}
