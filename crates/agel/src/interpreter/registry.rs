//! Operator registry mapping symbols to behaviors.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use agel_semantics::OperatorId;

use crate::interpreter::error::RegistryError;
use crate::interpreter::operators::{Operator, standard_operators};

/// Shared handle to a registered operator behavior.
///
/// Operators are compared by identity with [`same_operator`], never by
/// symbol.
pub type OperatorRef = Arc<dyn Operator>;

/// Whether two handles point at the same registered behavior.
pub fn same_operator(a: &OperatorRef, b: &OperatorRef) -> bool {
    Arc::ptr_eq(a, b)
}

static GLOBAL_REGISTRY: LazyLock<OperatorRegistry> = LazyLock::new(|| {
    OperatorRegistry::standard().unwrap_or_else(|e| panic!("invalid operator table: {e}"))
});

/// An immutable table of operator behaviors.
///
/// Lookup is by exact symbol or by [`OperatorId`]. Once built the registry is
/// never mutated, so one instance can be read from any number of threads.
#[derive(Debug)]
pub struct OperatorRegistry {
    /// Operators indexed by symbol.
    by_symbol: HashMap<&'static str, OperatorRef>,
    /// Operators indexed by id.
    by_id: HashMap<OperatorId, OperatorRef>,
}

impl OperatorRegistry {
    /// Build a registry from a list of behaviors.
    ///
    /// Returns an error if two behaviors claim the same symbol.
    pub fn new(operators: Vec<OperatorRef>) -> Result<Self, RegistryError> {
        let mut by_symbol = HashMap::with_capacity(operators.len());
        let mut by_id = HashMap::with_capacity(operators.len());
        for op in operators {
            let symbol = op.symbol();
            if by_symbol.contains_key(symbol) {
                return Err(RegistryError::DuplicateSymbol {
                    symbol: symbol.to_string(),
                });
            }
            by_id.insert(op.id(), Arc::clone(&op));
            by_symbol.insert(symbol, op);
        }
        Ok(Self { by_symbol, by_id })
    }

    /// Build a registry holding every standard AGEL operator.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::new(standard_operators())
    }

    /// The process-wide standard registry, built on first use.
    ///
    /// # Panics
    ///
    /// Panics on first use if the standard operator table contains a
    /// duplicate symbol; the process cannot evaluate anything without it.
    pub fn global() -> &'static OperatorRegistry {
        &GLOBAL_REGISTRY
    }

    /// Get the behavior registered for a symbol.
    pub fn lookup(&self, symbol: &str) -> Option<&OperatorRef> {
        self.by_symbol.get(symbol)
    }

    /// Check if a token is a registered operator symbol.
    pub fn is_operator(&self, token: &str) -> bool {
        self.by_symbol.contains_key(token)
    }

    /// Get the behavior registered for an operator id.
    pub fn get(&self, id: OperatorId) -> Option<&OperatorRef> {
        self.by_id.get(&id)
    }

    /// Check if `op` is the behavior registered for `id`.
    pub fn is(&self, op: &OperatorRef, id: OperatorId) -> bool {
        self.get(id).is_some_and(|registered| same_operator(op, registered))
    }

    /// Registered symbols, sorted.
    pub fn symbols(&self) -> Vec<&'static str> {
        let mut symbols: Vec<&'static str> = self.by_symbol.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }

    /// Number of registered behaviors.
    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}
