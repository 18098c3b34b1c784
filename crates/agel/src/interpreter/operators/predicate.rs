//! Comparison and boolean operators.

use std::cmp::Ordering;

use agel_semantics::OperatorId;
use tracing::debug;

use super::{EvalStacks, Operator};
use crate::interpreter::EvalError;
use crate::types::Value;

/// `==`
#[derive(Debug)]
pub struct Equal;

/// `!=`
#[derive(Debug)]
pub struct NotEqual;

/// `>`
#[derive(Debug)]
pub struct Greater;

/// `<`
#[derive(Debug)]
pub struct Less;

/// `>=`
#[derive(Debug)]
pub struct GreaterEqual;

/// `<=`
#[derive(Debug)]
pub struct LessEqual;

/// `&&`
#[derive(Debug)]
pub struct And;

/// `||`
#[derive(Debug)]
pub struct Or;

impl Operator for Equal {
    fn id(&self) -> OperatorId {
        OperatorId::Equal
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        equality(stacks, self.symbol(), true)
    }
}

impl Operator for NotEqual {
    fn id(&self) -> OperatorId {
        OperatorId::NotEqual
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        equality(stacks, self.symbol(), false)
    }
}

impl Operator for Greater {
    fn id(&self) -> OperatorId {
        OperatorId::Greater
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        ordering(stacks, self.symbol(), Ordering::is_gt)
    }
}

impl Operator for Less {
    fn id(&self) -> OperatorId {
        OperatorId::Less
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        ordering(stacks, self.symbol(), Ordering::is_lt)
    }
}

impl Operator for GreaterEqual {
    fn id(&self) -> OperatorId {
        OperatorId::GreaterEqual
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        ordering(stacks, self.symbol(), Ordering::is_ge)
    }
}

impl Operator for LessEqual {
    fn id(&self) -> OperatorId {
        OperatorId::LessEqual
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        ordering(stacks, self.symbol(), Ordering::is_le)
    }
}

impl Operator for And {
    fn id(&self) -> OperatorId {
        OperatorId::And
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        logical(stacks, self.symbol(), |a, b| a && b)
    }
}

impl Operator for Or {
    fn id(&self) -> OperatorId {
        OperatorId::Or
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        logical(stacks, self.symbol(), |a, b| a || b)
    }
}

/// String equality; `""` and `"null"` are the same value.
fn equality(
    stacks: &mut EvalStacks<'_>,
    symbol: &'static str,
    expect_equal: bool,
) -> Result<(), EvalError> {
    let rhs = stacks.pop_value(symbol)?.as_text();
    let lhs = stacks.pop_value(symbol)?.as_text();

    let result = (lhs == rhs) == expect_equal;

    debug!("{lhs} {symbol} {rhs} = {result}");

    stacks.push_value(result);
    Ok(())
}

/// Numeric comparison when both sides are numbers, lexicographic otherwise.
fn ordering(
    stacks: &mut EvalStacks<'_>,
    symbol: &'static str,
    accept: fn(Ordering) -> bool,
) -> Result<(), EvalError> {
    let rhs = stacks.pop_value(symbol)?;
    let lhs = stacks.pop_value(symbol)?;

    let result = match (lhs.as_number(), rhs.as_number()) {
        (Some(a), Some(b)) => a.partial_cmp(&b).is_some_and(accept),
        _ => accept(lhs.as_text().cmp(&rhs.as_text())),
    };

    debug!("{lhs} {symbol} {rhs} = {result}");

    stacks.push_value(result);
    Ok(())
}

/// Both operands must be boolean literals.
fn logical(
    stacks: &mut EvalStacks<'_>,
    symbol: &'static str,
    combine: fn(bool, bool) -> bool,
) -> Result<(), EvalError> {
    let rhs = stacks.pop_value(symbol)?;
    let lhs = stacks.pop_value(symbol)?;
    let a = require_bool(symbol, &lhs)?;
    let b = require_bool(symbol, &rhs)?;

    let result = combine(a, b);

    debug!("{lhs} {symbol} {rhs} = {result}");

    stacks.push_value(result);
    Ok(())
}

/// Read a boolean operand, failing with a type mismatch otherwise.
pub(super) fn require_bool(symbol: &'static str, value: &Value) -> Result<bool, EvalError> {
    value.as_bool().ok_or_else(|| EvalError::TypeMismatch {
        symbol,
        expected: "boolean",
        value: value.as_text(),
    })
}
