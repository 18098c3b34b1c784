//! AGEL interpreter.
//!
//! Logic expressions are evaluated by a shunting-yard loop over flat tokens,
//! with operator behaviors looked up in an [`OperatorRegistry`]. Operands and
//! surrounding text pass through the value resolver, which expands
//! `$CONSTANTS.NAME$` references against a caller-supplied table.

pub mod arity;
mod context;
mod engine;
mod error;
mod evaluator;
mod operators;
mod registry;
mod resolver;

pub use context::{DEFAULT_MAX_DEPTH, EvalContext};
pub use engine::Agel;
pub use error::{EvalError, LoadError, RegistryError, compute_suggestions};
pub use evaluator::{eval_str, eval_tokens};
pub use operators::{EvalStacks, Operator, standard_operators};
pub use registry::{OperatorRef, OperatorRegistry, same_operator};
pub use resolver::{ConstantValue, ValueExpression, parse_value};

/// The built-in operator behaviors, for assembling a custom registry.
pub mod builtins {
    pub use super::operators::{
        And, Divide, EndsWith, Equal, Greater, GreaterEqual, IsEmpty, IsNotEmpty, LeftParenthesis,
        Length, Less, LessEqual, Minus, Multiply, NotEqual, OptionPredicate, OptionResult, Or,
        ParamSeparator, Plus, RightParenthesis, StartsWith, Substring,
    };
}
