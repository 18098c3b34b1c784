//! Operator behaviors and the stacks they operate on.
//!
//! Each behavior pops its operands from the value stack and pushes exactly
//! one result, except the ternary `?` (a marker), the parameter separator
//! (which only counts parameters) and the parentheses (which unwind the
//! operator stack).

mod arithmetic;
mod function;
mod option;
mod parenthesis;
mod predicate;

use std::fmt::Debug;
use std::sync::Arc;

use agel_semantics::{OperatorId, OperatorKind};

use crate::interpreter::EvalError;
use crate::interpreter::registry::{OperatorRef, OperatorRegistry};
use crate::types::Value;

pub use arithmetic::{Divide, Minus, Multiply, Plus};
pub use function::{EndsWith, IsEmpty, IsNotEmpty, Length, ParamSeparator, StartsWith, Substring};
pub use option::{OptionPredicate, OptionResult};
pub use parenthesis::{LeftParenthesis, RightParenthesis};
pub use predicate::{And, Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual, Or};

/// A single operator behavior.
///
/// Symbol, priority and kind come from the shared table in
/// `agel-semantics`; an implementation only decides what happens to the
/// stacks when it is applied.
pub trait Operator: Send + Sync + Debug {
    /// Which operator this behavior implements.
    fn id(&self) -> OperatorId;

    /// Apply the operator to the evaluation stacks.
    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError>;

    /// The symbol this behavior is registered under.
    fn symbol(&self) -> &'static str {
        self.id().symbol()
    }

    /// Shunting-yard priority.
    fn priority(&self) -> u8 {
        self.id().priority()
    }

    /// Behavior family.
    fn kind(&self) -> OperatorKind {
        self.id().kind()
    }
}

/// Every standard operator, one instance per symbol.
pub fn standard_operators() -> Vec<OperatorRef> {
    vec![
        Arc::new(Plus),
        Arc::new(Minus),
        Arc::new(Multiply),
        Arc::new(Divide),
        Arc::new(IsEmpty),
        Arc::new(IsNotEmpty),
        Arc::new(StartsWith),
        Arc::new(EndsWith),
        Arc::new(Length),
        Arc::new(Substring),
        Arc::new(ParamSeparator),
        Arc::new(Equal),
        Arc::new(NotEqual),
        Arc::new(Greater),
        Arc::new(Less),
        Arc::new(GreaterEqual),
        Arc::new(LessEqual),
        Arc::new(And),
        Arc::new(Or),
        Arc::new(OptionPredicate),
        Arc::new(OptionResult),
        Arc::new(LeftParenthesis),
        Arc::new(RightParenthesis),
    ]
}

/// The operator and value stacks of one logic expression evaluation.
pub struct EvalStacks<'r> {
    registry: &'r OperatorRegistry,
    operators: Vec<OperatorRef>,
    values: Vec<Value>,
}

impl<'r> EvalStacks<'r> {
    /// Create empty stacks bound to a registry.
    pub fn new(registry: &'r OperatorRegistry) -> Self {
        Self {
            registry,
            operators: Vec::new(),
            values: Vec::new(),
        }
    }

    /// The registry operators are resolved against.
    pub fn registry(&self) -> &'r OperatorRegistry {
        self.registry
    }

    /// Push an operator.
    pub fn push_operator(&mut self, op: OperatorRef) {
        self.operators.push(op);
    }

    /// Pop the top operator.
    pub fn pop_operator(&mut self) -> Option<OperatorRef> {
        self.operators.pop()
    }

    /// The top operator, if any.
    pub fn peek_operator(&self) -> Option<&OperatorRef> {
        self.operators.last()
    }

    /// Push a value.
    pub fn push_value(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Pop an operand for the operator `symbol`.
    pub fn pop_value(&mut self, symbol: &'static str) -> Result<Value, EvalError> {
        self.values
            .pop()
            .ok_or(EvalError::MissingOperand { symbol })
    }

    /// The top value, if any.
    pub fn peek_value(&self) -> Option<&Value> {
        self.values.last()
    }

    /// Number of operators on the stack.
    pub fn operator_depth(&self) -> usize {
        self.operators.len()
    }

    /// Number of values on the stack.
    pub fn value_depth(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_operand_consumes_what_was_there() {
        let mut stacks = EvalStacks::new(OperatorRegistry::global());
        stacks.push_value("1");
        assert_eq!(stacks.value_depth(), 1);

        assert_eq!(Plus.apply(&mut stacks), Err(EvalError::MissingOperand { symbol: "+" }));
        assert_eq!(stacks.value_depth(), 0);
    }

    #[test]
    fn right_parenthesis_unwinds_to_its_left() {
        let registry = OperatorRegistry::global();
        let mut stacks = EvalStacks::new(registry);
        for id in [OperatorId::LeftParenthesis, OperatorId::Plus] {
            if let Some(op) = registry.get(id) {
                stacks.push_operator(Arc::clone(op));
            }
        }
        stacks.push_value("1");
        stacks.push_value("2");
        assert_eq!(stacks.operator_depth(), 2);

        RightParenthesis.apply(&mut stacks).unwrap();
        assert_eq!(stacks.operator_depth(), 0);
        assert_eq!(stacks.value_depth(), 1);
        assert_eq!(stacks.peek_value().map(Value::as_text).as_deref(), Some("3"));
    }
}
