//! Evaluation context for tracking state during recursive evaluation.

use crate::interpreter::EvalError;
use crate::interpreter::registry::OperatorRegistry;
use crate::types::ConstantsTable;

/// Default limit on nested constant resolution.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Evaluation context carrying state through recursive evaluation.
///
/// The context tracks:
/// - The caller's constants table, borrowed for the whole evaluation
/// - The operator registry used to recognize operator tokens
/// - The chain of constants being resolved, for cycle detection
/// - Resolution depth, for limiting deep recursion
pub struct EvalContext<'a> {
    /// Constants consulted and memoized by value expressions.
    constants: &'a mut dyn ConstantsTable,
    /// Operator table for this evaluation.
    registry: &'a OperatorRegistry,
    /// Constants currently being resolved, outermost first.
    call_stack: Vec<String>,
    /// Current recursion depth.
    depth: usize,
    /// Maximum allowed depth.
    max_depth: usize,
}

impl<'a> EvalContext<'a> {
    /// Create a context over a constants table.
    pub fn new(constants: &'a mut dyn ConstantsTable, registry: &'a OperatorRegistry) -> Self {
        Self::with_max_depth(constants, registry, DEFAULT_MAX_DEPTH)
    }

    /// Create context with custom max depth.
    pub fn with_max_depth(
        constants: &'a mut dyn ConstantsTable,
        registry: &'a OperatorRegistry,
        max_depth: usize,
    ) -> Self {
        Self {
            constants,
            registry,
            call_stack: Vec::new(),
            depth: 0,
            max_depth,
        }
    }

    /// The operator registry.
    pub fn registry(&self) -> &'a OperatorRegistry {
        self.registry
    }

    /// Look up the current value of a constant.
    pub fn get_constant(&self, name: &str) -> Option<String> {
        self.constants.get(name)
    }

    /// Store the resolved value of a constant.
    pub fn set_constant(&mut self, name: &str, value: String) {
        self.constants.set(name, value);
    }

    /// Names available in the constants table.
    pub fn constant_names(&self) -> Vec<String> {
        self.constants.names()
    }

    /// Check if a constant is already being resolved (cycle detection).
    pub fn is_in_call_stack(&self, name: &str) -> bool {
        self.call_stack.iter().any(|n| n == name)
    }

    /// Push a constant resolution onto the stack.
    ///
    /// Returns error if:
    /// - Maximum depth exceeded
    /// - Cycle detected (name already in call stack)
    pub fn push_call(&mut self, name: &str) -> Result<(), EvalError> {
        if self.depth >= self.max_depth {
            return Err(EvalError::MaxDepthExceeded);
        }
        if self.is_in_call_stack(name) {
            let mut chain = self.call_stack.clone();
            chain.push(name.to_string());
            return Err(EvalError::CyclicReference { chain });
        }
        self.call_stack.push(name.to_string());
        self.depth += 1;
        Ok(())
    }

    /// Pop a constant resolution from the stack.
    pub fn pop_call(&mut self) {
        self.call_stack.pop();
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    /// Get current recursion depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Get the call stack for error reporting.
    pub fn call_stack(&self) -> &[String] {
        &self.call_stack
    }
}
