//! Property tests: arithmetic precedence matches ordinary integer math.

use agel::constants;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
}

impl Op {
    fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
        }
    }

    fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
        }
    }

    fn binds_tighter(self) -> bool {
        matches!(self, Op::Mul)
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Add), Just(Op::Sub), Just(Op::Mul)]
}

/// `a op1 b op2 c` under the usual precedence and left associativity.
fn expected(a: i64, op1: Op, b: i64, op2: Op, c: i64) -> i64 {
    if op2.binds_tighter() && !op1.binds_tighter() {
        op1.apply(a, op2.apply(b, c))
    } else {
        op2.apply(op1.apply(a, b), c)
    }
}

fn eval_int(input: &str) -> i64 {
    let output = agel::eval(input, &mut constants! {}).unwrap();
    output.parse().unwrap()
}

proptest! {
    #[test]
    fn flat_expressions_follow_precedence(
        a in -1000_i64..1000,
        b in -1000_i64..1000,
        c in -1000_i64..1000,
        op1 in op_strategy(),
        op2 in op_strategy(),
    ) {
        let input = format!("#{{{a} {} {b} {} {c}}}", op1.symbol(), op2.symbol());
        prop_assert_eq!(eval_int(&input), expected(a, op1, b, op2, c));
    }

    #[test]
    fn parentheses_override_precedence(
        a in -1000_i64..1000,
        b in -1000_i64..1000,
        c in -1000_i64..1000,
        op1 in op_strategy(),
        op2 in op_strategy(),
    ) {
        let input = format!("#{{{a} {} ({b} {} {c})}}", op1.symbol(), op2.symbol());
        prop_assert_eq!(eval_int(&input), op1.apply(a, op2.apply(b, c)));
    }

    #[test]
    fn text_without_expressions_is_unchanged(text in "[a-zA-Z0-9 .,;:!?]{0,40}") {
        let output = agel::eval(&text, &mut constants! {}).unwrap();
        prop_assert_eq!(output, text);
    }
}
