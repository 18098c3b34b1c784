//! Logic expression tokenizer using winnow.
//!
//! The body of a `#{...}` span is split on runs of tab, carriage return,
//! newline and space. Inside each chunk the parenthesis and parameter
//! separator characters are split off as single-character tokens, so
//! `substring(abc,1)` yields `substring`, `(`, `abc`, `,`, `1`, `)`.

use agel_semantics::is_token_delimiter;
use winnow::combinator::{alt, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Split a logic expression body into tokens.
///
/// Empty tokens are never produced. Multi-character operators such as `==`
/// or `&&` are only recognized when separated from their operands by
/// whitespace or a delimiter.
///
/// ```
/// use agel::parser::tokenize;
///
/// assert_eq!(tokenize("(1+2) * 3"), vec!["(", "1+2", ")", "*", "3"]);
/// assert_eq!(tokenize("length( abc )"), vec!["length", "(", "abc", ")"]);
/// ```
pub fn tokenize(body: &str) -> Vec<&str> {
    let mut remaining = body;
    terminated(repeat(0.., preceded(separators, token)), separators)
        .parse_next(&mut remaining)
        .unwrap_or_default()
}

/// Whether `c` separates whitespace chunks.
fn is_separator(c: char) -> bool {
    matches!(c, '\t' | '\r' | '\n' | ' ')
}

/// Skip a (possibly empty) run of separators.
fn separators(input: &mut &str) -> ModalResult<()> {
    take_while(0.., is_separator).void().parse_next(input)
}

/// Parse a single token: a delimiter or a run of ordinary characters.
fn token<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt((delimiter, chunk)).parse_next(input)
}

/// Parse a single delimiter character.
fn delimiter<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    one_of(is_token_delimiter).take().parse_next(input)
}

/// Parse a run of characters that are neither separators nor delimiters.
fn chunk<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !is_separator(c) && !is_token_delimiter(c)).parse_next(input)
}
