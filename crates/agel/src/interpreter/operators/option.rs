//! Ternary `? :` operators.
//!
//! `?` is only a marker on the operator stack. All the work happens in `:`,
//! which by the time it runs has the predicate and both branches on the value
//! stack.

use agel_semantics::OperatorId;
use tracing::debug;

use super::predicate::require_bool;
use super::{EvalStacks, Operator};
use crate::interpreter::EvalError;

/// `?`
#[derive(Debug)]
pub struct OptionPredicate;

/// `:`
#[derive(Debug)]
pub struct OptionResult;

impl Operator for OptionPredicate {
    fn id(&self) -> OperatorId {
        OperatorId::OptionPredicate
    }

    fn apply(&self, _stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        Ok(())
    }
}

impl Operator for OptionResult {
    fn id(&self) -> OperatorId {
        OperatorId::OptionResult
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        let symbol = self.symbol();
        let when_false = stacks.pop_value(symbol)?;
        let when_true = stacks.pop_value(symbol)?;
        let predicate = stacks.pop_value(symbol)?;

        let selected = if require_bool(symbol, &predicate)? {
            when_true
        } else {
            when_false
        };

        debug!("{predicate} ? ... : ... = {selected}");

        stacks.push_value(selected);
        Ok(())
    }
}
