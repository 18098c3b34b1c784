//! Integration tests for individual operator behaviors.

use agel::{EvalError, constants};

fn eval(input: &str) -> String {
    agel::eval(input, &mut constants! {}).unwrap()
}

fn eval_err(input: &str) -> EvalError {
    agel::eval(input, &mut constants! {}).unwrap_err()
}

// =============================================================================
// Arithmetic
// =============================================================================

#[test]
fn test_addition_keeps_scale() {
    assert_eq!(eval("#{1.50 + 1}"), "2.50");
    assert_eq!(eval("#{0.1 + 0.2}"), "0.3");
}

#[test]
fn test_subtraction_can_go_negative() {
    assert_eq!(eval("#{5 - 7}"), "-2");
    assert_eq!(eval("#{-5 - -7}"), "2");
}

#[test]
fn test_multiplication_adds_scales() {
    assert_eq!(eval("#{1.5 * 2}"), "3.0");
    assert_eq!(eval("#{12 * 12}"), "144");
}

#[test]
fn test_terminating_division_is_exact() {
    assert_eq!(eval("#{10 / 4}"), "2.5");
    assert_eq!(eval("#{1 / 8}"), "0.125");
    assert_eq!(eval("#{10 / 5}"), "2");
    assert_eq!(eval("#{1.00 / 0.5}"), "2.0");
}

#[test]
fn test_non_terminating_division_rounds_half_up() {
    assert_eq!(eval("#{10 / 3}"), "3");
    assert_eq!(eval("#{20 / 3}"), "7");
    assert_eq!(eval("#{10.00 / 3}"), "3.33");
    assert_eq!(eval("#{2 / 0.3}"), "6.7");
}

#[test]
fn test_wide_operands_keep_every_digit() {
    assert_eq!(
        eval("#{0.12345678901234567890123456789012 + 0}"),
        "0.12345678901234567890123456789012"
    );
    assert_eq!(
        eval("#{12345678901234567890123456789012 + 1}"),
        "12345678901234567890123456789013"
    );
    assert_eq!(
        eval("#{99999999999999999999999999999 * 99999999999999999999999999999}"),
        "9999999999999999999999999999800000000000000000000000000001"
    );
}

#[test]
fn test_division_just_below_midpoint_rounds_down() {
    assert_eq!(
        eval("#{16666666666666666666666666666 / 33333333333333333333333333333}"),
        "0"
    );
}

#[test]
fn test_division_just_above_midpoint_rounds_up() {
    assert_eq!(
        eval("#{166666666666666666666666666667 / 333333333333333333333333333333}"),
        "1"
    );
}

#[test]
fn test_wide_non_terminating_division() {
    let expected = format!("{}4", "3".repeat(39));
    assert_eq!(eval("#{10000000000000000000000000000000000000001 / 3}"), expected);
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        eval_err("#{1 / 0}"),
        EvalError::Arithmetic {
            symbol: "/",
            message: "division by zero".to_string()
        }
    );
    assert_eq!(
        eval_err("#{0 / 0.0}"),
        EvalError::Arithmetic {
            symbol: "/",
            message: "division undefined".to_string()
        }
    );
}

#[test]
fn test_non_numeric_operand() {
    assert_eq!(
        eval_err("#{abc + 1}"),
        EvalError::Arithmetic {
            symbol: "+",
            message: "'abc' is not a number".to_string()
        }
    );
    assert!(matches!(
        eval_err("#{null * 2}"),
        EvalError::Arithmetic { symbol: "*", .. }
    ));
}

// =============================================================================
// Comparison
// =============================================================================

#[test]
fn test_equality_is_textual() {
    assert_eq!(eval("#{abc == abc}"), "true");
    assert_eq!(eval("#{abc != abc}"), "false");
    assert_eq!(eval("#{2.0 == 2}"), "false");
    assert_eq!(eval("#{Abc == abc}"), "false");
}

#[test]
fn test_null_placeholder_equals_empty() {
    let mut table = constants! { "E" => "" };
    assert_eq!(
        agel::eval("#{$CONSTANTS.E$ == null}", &mut table).unwrap(),
        "true"
    );
    assert_eq!(
        agel::eval("#{$CONSTANTS.E$ != x}", &mut table).unwrap(),
        "true"
    );
}

#[test]
fn test_numbers_compare_numerically() {
    assert_eq!(eval("#{10 > 9}"), "true");
    assert_eq!(eval("#{10 < 9}"), "false");
    assert_eq!(eval("#{2.0 >= 2}"), "true");
    assert_eq!(eval("#{2.0 <= 2}"), "true");
    assert_eq!(eval("#{-1 < 0.5}"), "true");
}

#[test]
fn test_text_compares_lexicographically() {
    assert_eq!(eval("#{abc < abd}"), "true");
    assert_eq!(eval("#{b > a}"), "true");
    assert_eq!(eval("#{10 > a}"), "false");
}

#[test]
fn test_boolean_results_flow_into_comparisons() {
    assert_eq!(eval("#{1 == 1 == true}"), "true");
}

// =============================================================================
// Boolean logic
// =============================================================================

#[test]
fn test_and_or() {
    assert_eq!(eval("#{true && false}"), "false");
    assert_eq!(eval("#{true && true}"), "true");
    assert_eq!(eval("#{false || true}"), "true");
    assert_eq!(eval("#{false || false}"), "false");
}

#[test]
fn test_boolean_literals_ignore_case() {
    assert_eq!(eval("#{TRUE && True}"), "true");
}

#[test]
fn test_and_binds_looser_than_comparison() {
    assert_eq!(eval("#{1 == 1 && 2 == 3}"), "false");
    assert_eq!(eval("#{1 < 2 || a == b}"), "true");
}

#[test]
fn test_non_boolean_operand_is_type_mismatch() {
    assert_eq!(
        eval_err("#{yes && true}"),
        EvalError::TypeMismatch {
            symbol: "&&",
            expected: "boolean",
            value: "yes".to_string()
        }
    );
    assert!(matches!(
        eval_err("#{false || 1}"),
        EvalError::TypeMismatch { symbol: "||", .. }
    ));
}

// =============================================================================
// Ternary
// =============================================================================

#[test]
fn test_ternary_selects_branch() {
    assert_eq!(eval("#{true ? 1 : 2}"), "1");
    assert_eq!(eval("#{false ? 1 : 2}"), "2");
    assert_eq!(eval("#{3 > 2 ? big : small}"), "big");
}

#[test]
fn test_ternary_branches_may_be_expressions() {
    assert_eq!(eval("#{1 == 1 ? 2 + 3 : 4 * 5}"), "5");
    assert_eq!(eval("#{1 == 2 ? 2 + 3 : 4 * 5}"), "20");
}

#[test]
fn test_non_boolean_predicate_is_type_mismatch() {
    assert_eq!(
        eval_err("#{maybe ? 1 : 2}"),
        EvalError::TypeMismatch {
            symbol: ":",
            expected: "boolean",
            value: "maybe".to_string()
        }
    );
}

// =============================================================================
// String functions
// =============================================================================

#[test]
fn test_is_empty() {
    assert_eq!(eval("#{isEmpty(null)}"), "true");
    assert_eq!(eval("#{isEmpty(a)}"), "false");
    assert_eq!(eval("#{isNotEmpty(null)}"), "false");
    assert_eq!(eval("#{isNotEmpty(a)}"), "true");
}

#[test]
fn test_starts_and_ends_with() {
    assert_eq!(eval("#{startsWith(abcd, ab)}"), "true");
    assert_eq!(eval("#{startsWith(abcd, cd)}"), "false");
    assert_eq!(eval("#{endsWith(abcd, cd)}"), "true");
    assert_eq!(eval("#{endsWith(abcd, ab)}"), "false");
}

#[test]
fn test_length_counts_characters() {
    assert_eq!(eval("#{length(abcd)}"), "4");
    assert_eq!(eval("#{length(日本語)}"), "3");
    assert_eq!(eval("#{length(null)}"), "0");
}

#[test]
fn test_function_result_feeds_arithmetic() {
    assert_eq!(eval("#{length(substring(abcdef, 2)) + 1}"), "5");
}

#[test]
fn test_substring_two_and_three_arguments() {
    assert_eq!(eval("#{substring(abcd, 1)}"), "bcd");
    assert_eq!(eval("#{substring(abcd, 1, 2)}"), "b");
    assert_eq!(eval("#{substring(abcd, 0, 4)}"), "abcd");
    assert_eq!(eval("#{substring(abcd, 4)}"), "");
}

#[test]
fn test_substring_indexes_characters() {
    assert_eq!(eval("#{substring(日本語, 1)}"), "本語");
}

#[test]
fn test_substring_truncates_fractional_indexes() {
    assert_eq!(eval("#{substring(abcd, 1.9, 3)}"), "bc");
}

#[test]
fn test_substring_argument_expressions() {
    assert_eq!(eval("#{substring(abcd, 1 + 1)}"), "cd");
    assert_eq!(eval("#{substring(abcd, 0, length(ab))}"), "ab");
}

#[test]
fn test_substring_wrong_arity() {
    assert_eq!(
        eval_err("#{substring(abcd)}"),
        EvalError::Arity {
            symbol: "substring",
            expected: "2 or 3",
            got: 1
        }
    );
    assert_eq!(
        eval_err("#{substring(abcd, 1, 2, 3)}"),
        EvalError::Arity {
            symbol: "substring",
            expected: "2 or 3",
            got: 4
        }
    );
}

#[test]
fn test_substring_out_of_bounds() {
    assert_eq!(
        eval_err("#{substring(abcd, 5)}"),
        EvalError::IndexOutOfBounds {
            symbol: "substring",
            begin: 5,
            end: 4,
            length: 4
        }
    );
    assert_eq!(
        eval_err("#{substring(abcd, -1)}"),
        EvalError::IndexOutOfBounds {
            symbol: "substring",
            begin: -1,
            end: 4,
            length: 4
        }
    );
    assert!(matches!(
        eval_err("#{substring(abcd, 3, 1)}"),
        EvalError::IndexOutOfBounds { .. }
    ));
}

#[test]
fn test_substring_non_numeric_index() {
    assert_eq!(
        eval_err("#{substring(abcd, x)}"),
        EvalError::TypeMismatch {
            symbol: "substring",
            expected: "number",
            value: "x".to_string()
        }
    );
}

// =============================================================================
// Parentheses
// =============================================================================

#[test]
fn test_parentheses_group() {
    assert_eq!(eval("#{(1 + 2) * 3}"), "9");
    assert_eq!(eval("#{((2))}"), "2");
    assert_eq!(eval("#{2 * (3 - (4 - 5))}"), "8");
}

#[test]
fn test_unmatched_right_parenthesis() {
    assert_eq!(eval_err("#{1 + 2)}"), EvalError::UnbalancedParenthesis);
}

#[test]
fn test_unclosed_left_parenthesis_is_tolerated() {
    assert_eq!(eval("#{(1 + 2}"), "3");
}

#[test]
fn test_missing_operand() {
    assert_eq!(
        eval_err("#{1 +}"),
        EvalError::MissingOperand { symbol: "+" }
    );
    assert!(matches!(
        eval_err("#{== 1}"),
        EvalError::MissingOperand { symbol: "==" }
    ));
}
