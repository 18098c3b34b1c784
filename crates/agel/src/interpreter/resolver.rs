//! Value expressions: `$...$` references resolved inside any text.
//!
//! The only value expression today is [`ConstantValue`]. Resolution is
//! recursive: a constant's value may itself contain logic expressions or
//! further references, and is fully resolved before being substituted.

use std::sync::LazyLock;

use regex::{Match, Regex};
use tracing::debug;

use crate::interpreter::error::compute_suggestions;
use crate::interpreter::evaluator::eval_str;
use crate::interpreter::{EvalContext, EvalError};
use crate::parser::{CONSTANT_REFERENCE_PATTERN, is_logic_expression};

/// A kind of `$...$` reference that can be resolved to text.
pub trait ValueExpression: Send + Sync {
    /// Pattern matching one reference.
    fn pattern(&self) -> &Regex;

    /// Resolve a single matched reference.
    fn eval(&self, matched: &str, ctx: &mut EvalContext<'_>) -> Result<String, EvalError>;

    /// Replace every reference in `input`, re-scanning from the start after
    /// each substitution until none remain.
    fn eval_all(&self, input: &str, ctx: &mut EvalContext<'_>) -> Result<String, EvalError> {
        let mut output = input.to_string();
        while let Some(range) = self.pattern().find(&output).as_ref().map(Match::range) {
            let resolved = self.eval(&output[range.clone()], ctx)?;
            output.replace_range(range, &resolved);
        }
        Ok(output)
    }
}

static CONSTANT_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CONSTANT_REFERENCE_PATTERN).expect("constant reference pattern is valid")
});

const CONSTANT_PREFIX: &str = "$CONSTANTS.";
const CONSTANT_SUFFIX: &str = "$";

/// `$CONSTANTS.NAME$`, looked up in the caller's constants table.
///
/// The fully resolved value is written back to the table, so each constant
/// is evaluated at most once per table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantValue;

impl ConstantValue {
    /// Name inside a `$CONSTANTS.NAME$` reference.
    pub fn name(matched: &str) -> &str {
        matched
            .strip_prefix(CONSTANT_PREFIX)
            .and_then(|s| s.strip_suffix(CONSTANT_SUFFIX))
            .unwrap_or(matched)
    }
}

impl ValueExpression for ConstantValue {
    fn pattern(&self) -> &Regex {
        &CONSTANT_REFERENCE
    }

    fn eval(&self, matched: &str, ctx: &mut EvalContext<'_>) -> Result<String, EvalError> {
        let name = Self::name(matched);
        let Some(value) = ctx.get_constant(name) else {
            let suggestions = compute_suggestions(name, &ctx.constant_names());
            return Err(EvalError::UnknownConstant {
                name: name.to_string(),
                suggestions,
            });
        };

        ctx.push_call(name)?;
        let resolved = parse_value(&value, ctx);
        ctx.pop_call();
        let resolved = resolved?;

        debug!("{matched} = {resolved}");

        ctx.set_constant(name, resolved.clone());
        Ok(resolved)
    }
}

/// Every registered value expression.
static VALUE_EXPRESSIONS: &[&dyn ValueExpression] = &[&ConstantValue];

/// Resolve an operand or a constant's raw value to literal text.
///
/// Text containing a logic expression goes back through the evaluator.
/// Otherwise each value expression pattern is resolved in turn, and text
/// with no expressions at all is returned unchanged.
pub fn parse_value(token: &str, ctx: &mut EvalContext<'_>) -> Result<String, EvalError> {
    if is_logic_expression(token) {
        return eval_str(token, ctx);
    }

    let mut output = token.to_string();
    for expression in VALUE_EXPRESSIONS {
        if expression.pattern().is_match(&output) {
            output = expression.eval_all(&output, ctx)?;
        }
    }
    Ok(output)
}
