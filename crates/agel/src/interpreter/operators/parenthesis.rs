//! Parentheses, which group sub-expressions and close function calls.

use agel_semantics::{OperatorId, OperatorKind};

use super::{EvalStacks, Operator};
use crate::interpreter::EvalError;

/// `(`
#[derive(Debug)]
pub struct LeftParenthesis;

/// `)`
#[derive(Debug)]
pub struct RightParenthesis;

impl Operator for LeftParenthesis {
    fn id(&self) -> OperatorId {
        OperatorId::LeftParenthesis
    }

    /// A left parenthesis is only applied when a `)` (or the end of the
    /// expression) unwinds it. If a function was pushed just before it, the
    /// parenthesis held that function's arguments, so the function runs now.
    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        let beneath_is_function = stacks
            .peek_operator()
            .is_some_and(|op| op.kind() == OperatorKind::Function);
        if beneath_is_function {
            if let Some(function) = stacks.pop_operator() {
                function.apply(stacks)?;
            }
        }
        Ok(())
    }
}

impl Operator for RightParenthesis {
    fn id(&self) -> OperatorId {
        OperatorId::RightParenthesis
    }

    /// Apply operators until the matching `(` has been applied.
    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        loop {
            let op = stacks
                .pop_operator()
                .ok_or(EvalError::UnbalancedParenthesis)?;
            op.apply(stacks)?;
            if stacks.registry().is(&op, OperatorId::LeftParenthesis) {
                return Ok(());
            }
        }
    }
}
