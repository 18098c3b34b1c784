//! Integration tests for the operator registry.

use std::ptr;
use std::sync::Arc;

use agel::interpreter::builtins::{LeftParenthesis, Plus, RightParenthesis};
use agel::interpreter::standard_operators;
use agel::{Agel, OperatorRef, OperatorRegistry, RegistryError, same_operator};
use agel_semantics::{OperatorId, OperatorKind};

// =============================================================================
// Standard registry
// =============================================================================

#[test]
fn test_standard_registry_has_every_operator() {
    let registry = OperatorRegistry::standard().unwrap();
    assert_eq!(registry.len(), OperatorId::ALL.len());
    for id in OperatorId::ALL {
        assert!(registry.is_operator(id.symbol()), "missing {}", id.symbol());
        assert_eq!(registry.get(id).unwrap().id(), id);
    }
}

#[test]
fn test_lookup_is_exact() {
    let registry = OperatorRegistry::global();
    assert!(registry.lookup("substring").is_some());
    assert!(registry.lookup("Substring").is_none());
    assert!(registry.lookup("+ ").is_none());
    assert!(!registry.is_operator("abc"));
}

#[test]
fn test_lookup_returns_metadata() {
    let registry = OperatorRegistry::global();
    let op = registry.lookup("*").unwrap();
    assert_eq!(op.symbol(), "*");
    assert_eq!(op.priority(), 5);
    assert_eq!(op.kind(), OperatorKind::Arithmetic);

    let op = registry.lookup("length").unwrap();
    assert_eq!(op.priority(), 6);
    assert_eq!(op.kind(), OperatorKind::Function);
}

#[test]
fn test_symbols_are_sorted() {
    let symbols = OperatorRegistry::global().symbols();
    let mut sorted = symbols.clone();
    sorted.sort_unstable();
    assert_eq!(symbols, sorted);
    assert!(symbols.contains(&"&&"));
    assert!(symbols.contains(&"isNotEmpty"));
}

#[test]
fn test_global_registry_is_shared() {
    assert!(ptr::eq(
        OperatorRegistry::global(),
        OperatorRegistry::global()
    ));
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn test_lookup_and_get_return_same_behavior() {
    let registry = OperatorRegistry::global();
    let by_symbol = registry.lookup("(").unwrap();
    let by_id = registry.get(OperatorId::LeftParenthesis).unwrap();
    assert!(same_operator(by_symbol, by_id));
    assert!(registry.is(by_symbol, OperatorId::LeftParenthesis));
    assert!(!registry.is(by_symbol, OperatorId::RightParenthesis));
}

#[test]
fn test_distinct_behaviors_are_never_equal() {
    let registry = OperatorRegistry::global();
    let plus = registry.lookup("+").unwrap();
    let minus = registry.lookup("-").unwrap();
    assert!(!same_operator(plus, minus));
}

#[test]
fn test_identity_is_per_registry() {
    let a = OperatorRegistry::standard().unwrap();
    let b = OperatorRegistry::standard().unwrap();
    let plus_a = a.lookup("+").unwrap();
    assert!(!b.is(plus_a, OperatorId::Plus));
    assert!(a.is(plus_a, OperatorId::Plus));
}

// =============================================================================
// Custom registries
// =============================================================================

#[test]
fn test_duplicate_symbol_is_rejected() {
    let operators: Vec<OperatorRef> = vec![Arc::new(Plus), Arc::new(Plus)];
    let err = OperatorRegistry::new(operators).unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateSymbol {
            symbol: "+".to_string()
        }
    );
    assert_eq!(err.to_string(), "duplicate operator symbol '+'");
}

#[test]
fn test_duplicate_in_full_table_is_rejected() {
    let mut operators = standard_operators();
    operators.push(Arc::new(RightParenthesis));
    assert!(OperatorRegistry::new(operators).is_err());
}

#[test]
fn test_unregistered_symbols_are_operands() {
    let operators: Vec<OperatorRef> = vec![
        Arc::new(Plus),
        Arc::new(LeftParenthesis),
        Arc::new(RightParenthesis),
    ];
    let registry = OperatorRegistry::new(operators).unwrap();
    assert_eq!(registry.len(), 3);

    let agel = Agel::builder().registry(Arc::new(registry)).build();
    let mut table = agel::constants! {};
    assert_eq!(agel.eval("#{(1 + 2) + 3}", &mut table).unwrap(), "6");
    // `*` is not registered, so it is pushed as a value and the last operand
    // ends up on top of the stack.
    assert_eq!(agel.eval("#{2 * 3}", &mut table).unwrap(), "3");
}
