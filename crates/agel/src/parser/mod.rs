//! AGEL tokenizer, span patterns, and constants-file parser.
//!
//! Logic expressions are not parsed into an AST: the body of each `#{...}`
//! span is split into flat tokens and handed to the shunting-yard evaluator.

pub mod error;
mod file;
mod spans;
mod tokenizer;

pub use error::ParseError;
pub use file::{ConstantDefinition, parse_constants};
pub use spans::{
    CONSTANT_REFERENCE_PATTERN, find_logic_expression, is_logic_expression, logic_body,
};
pub use tokenizer::tokenize;
