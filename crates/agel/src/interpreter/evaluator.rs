//! Shunting-yard evaluation of logic expressions.
//!
//! Operators are pushed onto an operator stack and applied against a value
//! stack in priority order. There is no AST: each operator behavior mutates
//! the stacks directly when it is applied.

use std::sync::Arc;

use agel_semantics::OperatorId;
use tracing::debug;

use crate::interpreter::operators::EvalStacks;
use crate::interpreter::resolver::parse_value;
use crate::interpreter::{EvalContext, EvalError};
use crate::parser::{find_logic_expression, is_logic_expression, logic_body, tokenize};
use crate::types::Value;

/// Resolve every expression in `input`.
///
/// Text without a `#{...}` span is handed straight to the value resolver.
/// Otherwise the first span is evaluated and spliced back in place, and the
/// string is re-scanned until no span remains; `$...$` references left in
/// the surrounding text are then resolved as well.
///
/// # Errors
///
/// Returns the first error raised by any span or reference. No partial
/// result is produced.
pub fn eval_str(input: &str, ctx: &mut EvalContext<'_>) -> Result<String, EvalError> {
    if !is_logic_expression(input) {
        return parse_value(input, ctx);
    }

    debug!(expression = input, "evaluating");

    let mut output = input.to_string();
    while let Some(range) = find_logic_expression(&output) {
        let value = eval_logic(&output[range.clone()], ctx)?;
        output.replace_range(range, &value);
    }
    let output = parse_value(&output, ctx)?;

    debug!(expression = input, result = %output, "evaluated");

    Ok(output)
}

/// Evaluate a single `#{...}` span.
fn eval_logic(span: &str, ctx: &mut EvalContext<'_>) -> Result<String, EvalError> {
    let tokens = tokenize(logic_body(span));
    match eval_tokens(&tokens, ctx) {
        Err(EvalError::EmptyExpression { .. }) => Err(EvalError::EmptyExpression {
            expression: span.to_string(),
        }),
        result => result,
    }
}

/// Run the shunting-yard algorithm over already-split tokens.
///
/// - `)` is applied as soon as it is read.
/// - Any other operator first applies every stacked operator of equal or
///   higher priority, stopping at a `,` or `(`, then is pushed.
/// - Operands are resolved with the value resolver and pushed as text.
///
/// Remaining operators are applied at the end; the result is the top of the
/// value stack.
///
/// # Errors
///
/// Returns [`EvalError::EmptyExpression`] if no value is left, or any error
/// raised by an operator or the value resolver.
pub fn eval_tokens(tokens: &[&str], ctx: &mut EvalContext<'_>) -> Result<String, EvalError> {
    let registry = ctx.registry();
    let mut stacks = EvalStacks::new(registry);

    for &token in tokens {
        let Some(op) = registry.lookup(token) else {
            let value = parse_value(token, ctx)?;
            stacks.push_value(value);
            continue;
        };
        let op = Arc::clone(op);

        if registry.is(&op, OperatorId::RightParenthesis) {
            op.apply(&mut stacks)?;
            continue;
        }

        loop {
            let reduce = stacks.peek_operator().is_some_and(|top| {
                op.priority() <= top.priority()
                    && !registry.is(top, OperatorId::ParamSeparator)
                    && !registry.is(top, OperatorId::LeftParenthesis)
            });
            if !reduce {
                break;
            }
            if let Some(top) = stacks.pop_operator() {
                top.apply(&mut stacks)?;
            }
        }
        stacks.push_operator(op);
    }

    while let Some(op) = stacks.pop_operator() {
        op.apply(&mut stacks)?;
    }

    stacks
        .peek_value()
        .map(Value::as_text)
        .ok_or_else(|| EvalError::EmptyExpression {
            expression: tokens.join(" "),
        })
}
