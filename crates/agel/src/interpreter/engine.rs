//! The top-level dispatcher.

use std::sync::Arc;

use bon::Builder;

use crate::interpreter::context::DEFAULT_MAX_DEPTH;
use crate::interpreter::registry::OperatorRegistry;
use crate::interpreter::{EvalContext, EvalError, arity, evaluator};
use crate::types::ConstantsTable;

/// Evaluates strings containing AGEL logic and value expressions.
///
/// An `Agel` holds no per-call state: every [`eval`](Agel::eval) builds its
/// own context and stacks, so one instance can be shared across threads as
/// long as each call gets its own constants table.
///
/// # Example
///
/// ```
/// use agel::{Agel, constants};
///
/// let agel = Agel::builder().max_depth(16).build();
/// let mut table = constants! { "RATE" => "#{10 / 4}" };
///
/// assert_eq!(agel.eval("rate=$CONSTANTS.RATE$", &mut table).unwrap(), "rate=2.5");
/// assert_eq!(table["RATE"], "2.5");
/// ```
#[derive(Debug, Builder)]
pub struct Agel {
    /// Maximum nesting of constant resolution.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Operator table; the global registry when unset.
    registry: Option<Arc<OperatorRegistry>>,
}

impl Default for Agel {
    fn default() -> Self {
        Agel::builder().build()
    }
}

impl Agel {
    /// Create an evaluator with the default depth limit and the global
    /// registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum nesting of constant resolution.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The operator table used by this evaluator.
    pub fn registry(&self) -> &OperatorRegistry {
        self.registry
            .as_deref()
            .unwrap_or_else(|| OperatorRegistry::global())
    }

    /// Resolve every logic and value expression in `input`.
    ///
    /// Resolved constants are written back to `constants`.
    ///
    /// # Errors
    ///
    /// Returns the first [`EvalError`] raised; `input` is never partially
    /// resolved.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval(
        &self,
        input: &str,
        constants: &mut dyn ConstantsTable,
    ) -> Result<String, EvalError> {
        arity::clear();
        let mut ctx = EvalContext::with_max_depth(constants, self.registry(), self.max_depth);
        evaluator::eval_str(input, &mut ctx)
    }

    /// Evaluate the tokens of a single logic expression body.
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use agel::Agel;
    /// use agel::parser::tokenize;
    ///
    /// let tokens = tokenize("substring(abcd, 1, 3)");
    /// let mut table = HashMap::new();
    /// assert_eq!(Agel::new().eval_tokens(&tokens, &mut table).unwrap(), "bc");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::EmptyExpression`] for an empty token list, or the
    /// first error raised while evaluating.
    pub fn eval_tokens(
        &self,
        tokens: &[&str],
        constants: &mut dyn ConstantsTable,
    ) -> Result<String, EvalError> {
        arity::clear();
        let mut ctx = EvalContext::with_max_depth(constants, self.registry(), self.max_depth);
        evaluator::eval_tokens(tokens, &mut ctx)
    }
}
