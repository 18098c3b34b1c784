//! Arithmetic operators over arbitrary-precision decimals.
//!
//! Operands are parsed from text on every use and results are pushed back as
//! plain decimal text, so `1.50 + 1` yields `2.50`. No operand width is too
//! large: digits are never dropped on the way in.

use std::str::FromStr;

use agel_semantics::OperatorId;
use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use bigdecimal::num_traits::{One, Signed, Zero};
use tracing::debug;

use super::{EvalStacks, Operator};
use crate::interpreter::EvalError;
use crate::types::Value;

/// `+`
#[derive(Debug)]
pub struct Plus;

/// `-`
#[derive(Debug)]
pub struct Minus;

/// `*`
#[derive(Debug)]
pub struct Multiply;

/// `/`
#[derive(Debug)]
pub struct Divide;

impl Operator for Plus {
    fn id(&self) -> OperatorId {
        OperatorId::Plus
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        binary(stacks, self.symbol(), |a, b| Ok(a + b))
    }
}

impl Operator for Minus {
    fn id(&self) -> OperatorId {
        OperatorId::Minus
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        binary(stacks, self.symbol(), |a, b| Ok(a - b))
    }
}

impl Operator for Multiply {
    fn id(&self) -> OperatorId {
        OperatorId::Multiply
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        binary(stacks, self.symbol(), |a, b| Ok(a * b))
    }
}

impl Operator for Divide {
    fn id(&self) -> OperatorId {
        OperatorId::Divide
    }

    fn apply(&self, stacks: &mut EvalStacks<'_>) -> Result<(), EvalError> {
        binary(stacks, self.symbol(), |a, b| divide(&a, &b))
    }
}

/// Pop two decimal operands, combine them, and push the plain-text result.
fn binary(
    stacks: &mut EvalStacks<'_>,
    symbol: &'static str,
    op: impl FnOnce(BigDecimal, BigDecimal) -> Result<BigDecimal, String>,
) -> Result<(), EvalError> {
    let rhs = stacks.pop_value(symbol)?;
    let lhs = stacks.pop_value(symbol)?;
    let a = parse_decimal(symbol, &lhs)?;
    let b = parse_decimal(symbol, &rhs)?;

    let result = op(a, b)
        .map_err(|message| EvalError::Arithmetic { symbol, message })?
        .to_plain_string();

    debug!("{lhs} {symbol} {rhs} = {result}");

    stacks.push_value(result);
    Ok(())
}

/// Parse an operand as an exact decimal, in plain or scientific (`1e3`)
/// notation. The empty string and the null placeholder are not numbers.
fn parse_decimal(symbol: &'static str, value: &Value) -> Result<BigDecimal, EvalError> {
    let text = value.as_text();
    BigDecimal::from_str(&text).map_err(|_| EvalError::Arithmetic {
        symbol,
        message: format!("'{text}' is not a number"),
    })
}

/// Divide exactly when the quotient terminates, otherwise round half-up at
/// the larger of the operand scales.
///
/// An exact quotient keeps at least the scale `dividend.scale -
/// divisor.scale`, so `1.00 / 0.5` is `2.0` while `10 / 4` is `2.5`.
/// Rounding works from the exact remainder, so a quotient just below a
/// midpoint never rounds up.
fn divide(dividend: &BigDecimal, divisor: &BigDecimal) -> Result<BigDecimal, String> {
    if divisor.is_zero() {
        return Err(if dividend.is_zero() {
            "division undefined".to_string()
        } else {
            "division by zero".to_string()
        });
    }
    let (dividend_digits, dividend_scale) = dividend.as_bigint_and_exponent();
    let (divisor_digits, divisor_scale) = divisor.as_bigint_and_exponent();

    if is_terminating(&dividend_digits, &divisor_digits) {
        let preferred = (dividend_scale - divisor_scale).max(0);
        let mut scale = preferred;
        loop {
            let (numerator, denominator) = scaled_ratio(
                &dividend_digits,
                dividend_scale,
                &divisor_digits,
                divisor_scale,
                scale,
            )?;
            if (&numerator % &denominator).is_zero() {
                return Ok(BigDecimal::new(numerator / denominator, scale));
            }
            scale += 1;
        }
    }

    let scale = dividend_scale.max(divisor_scale).max(0);
    let (numerator, denominator) = scaled_ratio(
        &dividend_digits,
        dividend_scale,
        &divisor_digits,
        divisor_scale,
        scale,
    )?;
    let mut quotient = &numerator / &denominator;
    let remainder = &numerator % &denominator;
    if remainder.abs() * BigInt::from(2) >= denominator.abs() {
        if numerator.is_negative() == denominator.is_negative() {
            quotient += BigInt::one();
        } else {
            quotient -= BigInt::one();
        }
    }
    Ok(BigDecimal::new(quotient, scale))
}

/// Express `dividend / divisor` at `scale` as an integer ratio: the quotient
/// digits at that scale are `numerator / denominator`.
fn scaled_ratio(
    dividend_digits: &BigInt,
    dividend_scale: i64,
    divisor_digits: &BigInt,
    divisor_scale: i64,
    scale: i64,
) -> Result<(BigInt, BigInt), String> {
    let shift = scale + divisor_scale - dividend_scale;
    let power = pow10(shift.unsigned_abs())?;
    Ok(if shift >= 0 {
        (dividend_digits * power, divisor_digits.clone())
    } else {
        (dividend_digits.clone(), divisor_digits * power)
    })
}

fn pow10(exponent: u64) -> Result<BigInt, String> {
    let exponent = u32::try_from(exponent).map_err(|_| "exponent out of range".to_string())?;
    Ok(BigInt::from(10).pow(exponent))
}

/// Whether `dividend / divisor` has a finite decimal expansion.
///
/// Scale factors are powers of ten and never affect termination, so only
/// the digits matter: the reduced denominator must have no prime factors
/// other than 2 and 5.
fn is_terminating(dividend_digits: &BigInt, divisor_digits: &BigInt) -> bool {
    let divisor = divisor_digits.abs();
    let mut reduced = &divisor / gcd(dividend_digits.abs(), divisor.clone());
    for factor in [BigInt::from(2), BigInt::from(5)] {
        while (&reduced % &factor).is_zero() {
            reduced /= &factor;
        }
    }
    reduced.is_one()
}

fn gcd(mut a: BigInt, mut b: BigInt) -> BigInt {
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}
