//! String functions and the parameter separator.
//!
//! A function runs when the `(` that follows it is unwound, so its
//! arguments are already on the value stack, last argument on top. Every
//! function holds an [`ArityGuard`] while it runs so the parameter count
//! never leaks into the next call.

use agel_semantics::OperatorId;
use tracing::debug;

use super::{EvalStacks, Operator};
use crate::interpreter::EvalError;
use crate::interpreter::arity::{self, ArityGuard};
use crate::types::Value;

/// `isEmpty(x)`: `x` is `""` or `"null"`.
#[derive(Debug)]
pub struct IsEmpty;

/// `isNotEmpty(x)`
#[derive(Debug)]
pub struct IsNotEmpty;

/// `startsWith(target, prefix)`
#[derive(Debug)]
pub struct StartsWith;

/// `endsWith(target, suffix)`
#[derive(Debug)]
pub struct EndsWith;

/// `length(x)`: number of characters.
#[derive(Debug)]
pub struct Length;

/// `substring(target, begin)` or `substring(target, begin, end)`.
///
/// Indices count characters; `end` is exclusive.
#[derive(Debug)]
pub struct Substring;

/// `,` between function arguments.
#[derive(Debug)]
pub struct ParamSeparator;

impl Operator for IsEmpty {
    fn id(&self) -> OperatorId {
        OperatorId::IsEmpty
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        let _guard = ArityGuard::new();
        let target = stacks.pop_value(self.symbol())?;
        let result = target.is_empty_text();
        debug!("isEmpty({target}) = {result}");
        stacks.push_value(result);
        Ok(())
    }
}

impl Operator for IsNotEmpty {
    fn id(&self) -> OperatorId {
        OperatorId::IsNotEmpty
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        let _guard = ArityGuard::new();
        let target = stacks.pop_value(self.symbol())?;
        let result = !target.is_empty_text();
        debug!("isNotEmpty({target}) = {result}");
        stacks.push_value(result);
        Ok(())
    }
}

impl Operator for StartsWith {
    fn id(&self) -> OperatorId {
        OperatorId::StartsWith
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        affix(stacks, self.symbol(), |target, prefix| target.starts_with(prefix))
    }
}

impl Operator for EndsWith {
    fn id(&self) -> OperatorId {
        OperatorId::EndsWith
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        affix(stacks, self.symbol(), |target, suffix| target.ends_with(suffix))
    }
}

impl Operator for Length {
    fn id(&self) -> OperatorId {
        OperatorId::Length
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        let _guard = ArityGuard::new();
        let target = stacks.pop_value(self.symbol())?.as_text();
        let result = target.chars().count();
        debug!("length({target}) = {result}");
        stacks.push_value(result.to_string());
        Ok(())
    }
}

impl Operator for Substring {
    fn id(&self) -> OperatorId {
        OperatorId::Substring
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        let _guard = ArityGuard::new();
        let symbol = self.symbol();

        let (target, begin, end) = match arity::current() {
            2 => {
                let begin = index(symbol, &stacks.pop_value(symbol)?)?;
                let target = stacks.pop_value(symbol)?.as_text();
                (target, begin, None)
            }
            3 => {
                let end = index(symbol, &stacks.pop_value(symbol)?)?;
                let begin = index(symbol, &stacks.pop_value(symbol)?)?;
                let target = stacks.pop_value(symbol)?.as_text();
                (target, begin, Some(end))
            }
            got => {
                return Err(EvalError::Arity {
                    symbol,
                    expected: "2 or 3",
                    got,
                });
            }
        };

        let length = target.chars().count();
        let end_index = end.unwrap_or_else(|| i64::try_from(length).unwrap_or(i64::MAX));
        let (Ok(from), Ok(to)) = (usize::try_from(begin), usize::try_from(end_index)) else {
            return Err(out_of_bounds(symbol, begin, end_index, length));
        };
        if to > length || from > to {
            return Err(out_of_bounds(symbol, begin, end_index, length));
        }

        let result: String = target.chars().skip(from).take(to - from).collect();

        match end {
            Some(end) => debug!("substring({target}, {begin}, {end}) = {result}"),
            None => debug!("substring({target}, {begin}) = {result}"),
        }

        stacks.push_value(result);
        Ok(())
    }
}

impl Operator for ParamSeparator {
    fn id(&self) -> OperatorId {
        OperatorId::ParamSeparator
    }

    fn apply(&self, _stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        arity::increment();
        Ok(())
    }
}

/// Shared body of `startsWith` and `endsWith`: the affix is on top, the
/// target beneath it.
fn affix(
    stacks: &mut EvalStacks<'_>,
    symbol: &'static str,
    test: fn(&str, &str) -> bool,
) -> Result<(), EvalError> {
    let _guard = ArityGuard::new();
    let affix = stacks.pop_value(symbol)?.as_text();
    let target = stacks.pop_value(symbol)?.as_text();
    let result = test(&target, &affix);
    debug!("{symbol}({target}, {affix}) = {result}");
    stacks.push_value(result);
    Ok(())
}

/// Read an index argument; fractional values are truncated toward zero.
fn index(symbol: &'static str, value: &Value) -> Result<i64, EvalError> {
    match value.as_number() {
        Some(n) if n.is_finite() => Ok(n.trunc() as i64),
        _ => Err(EvalError::TypeMismatch {
            symbol,
            expected: "number",
            value: value.as_text(),
        }),
    }
}

fn out_of_bounds(symbol: &'static str, begin: i64, end: i64, length: usize) -> EvalError {
    EvalError::IndexOutOfBounds {
        symbol,
        begin,
        end,
        length,
    }
}
