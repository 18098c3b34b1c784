//! Regular expressions locating logic and value expression spans.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Match, Regex};

/// Pattern of a constant reference: `$CONSTANTS.NAME$`.
pub const CONSTANT_REFERENCE_PATTERN: &str = r"\$CONSTANTS\.[_0-9a-zA-Z]+\$";

const EXPRESSION_STARTER: &str = "#{";
const EXPRESSION_FINISHER: &str = "}";

/// Shortest `#{...}` span, allowed to cross line breaks.
static LOGIC_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)#\{.+?\}").expect("logic expression pattern is valid")
});

/// Byte range of the first `#{...}` span in `input`.
///
/// ```
/// use agel::parser::find_logic_expression;
///
/// let input = "a #{1 + 2} b #{3}";
/// assert_eq!(find_logic_expression(input), Some(2..10));
/// assert_eq!(find_logic_expression("plain"), None);
/// ```
pub fn find_logic_expression(input: &str) -> Option<Range<usize>> {
    LOGIC_EXPRESSION.find(input).as_ref().map(Match::range)
}

/// Whether `input` contains at least one `#{...}` span.
pub fn is_logic_expression(input: &str) -> bool {
    LOGIC_EXPRESSION.is_match(input)
}

/// Strip the `#{` and `}` delimiters from a span.
///
/// Text that is not delimited is returned unchanged.
pub fn logic_body(span: &str) -> &str {
    span.strip_prefix(EXPRESSION_STARTER)
        .and_then(|s| s.strip_suffix(EXPRESSION_FINISHER))
        .unwrap_or(span)
}
