//! Constants file parser.
//!
//! A constants file holds one definition per `NAME = "value";` entry. Line
//! comments start with `//`. Values are double-quoted and support the
//! escapes `\"`, `\\`, `\n` and `\t`; everything else, including `#{...}`
//! and `$CONSTANTS.X$` references, is kept verbatim for the evaluator.

use std::collections::HashSet;

use serde::Serialize;
use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

use super::error::ParseError;

/// A single `NAME = "value";` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstantDefinition {
    /// Constant name as referenced by `$CONSTANTS.NAME$`.
    pub name: String,
    /// Unresolved value text.
    pub value: String,
    /// Line (1-based) the definition starts on.
    pub line: usize,
}

/// Parse a constants file into definitions, in file order.
pub fn parse_constants(input: &str) -> Result<Vec<ConstantDefinition>, ParseError> {
    let mut remaining = input;
    let mut definitions = Vec::new();
    let mut seen = HashSet::new();

    loop {
        if let Err(e) = skip_ws_and_comments(&mut remaining) {
            return Err(syntax_error(input, remaining, format!("parse error: {e}")));
        }
        if remaining.is_empty() {
            return Ok(definitions);
        }

        let (line, _) = calculate_position(input, remaining);
        let (name, value) = match definition(&mut remaining) {
            Ok(parsed) => parsed,
            Err(_) => {
                let message = match remaining.chars().next() {
                    Some(c) => format!("unexpected character: '{c}'"),
                    None => "unexpected end of input".to_string(),
                };
                return Err(syntax_error(input, remaining, message));
            }
        };

        if !seen.insert(name.clone()) {
            return Err(ParseError::DuplicateConstant { name, line });
        }
        definitions.push(ConstantDefinition { name, value, line });
    }
}

fn syntax_error(original: &str, remaining: &str, message: String) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    ParseError::Syntax {
        line,
        column,
        message,
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse a definition: NAME = "value" ;
fn definition(input: &mut &str) -> ModalResult<(String, String)> {
    let name = constant_name(input)?;
    skip_ws_and_comments(input)?;
    '='.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let value = quoted_value(input)?;
    skip_ws_and_comments(input)?;
    ';'.parse_next(input)?;
    Ok((name.to_string(), value))
}

/// Parse a constant name: the same alphabet `$CONSTANTS.NAME$` accepts.
fn constant_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

/// Parse a double-quoted value with escapes.
fn quoted_value(input: &mut &str) -> ModalResult<String> {
    delimited(
        '"',
        repeat(0.., alt((escaped_char, none_of(['"', '\\'])))),
        '"',
    )
    .parse_next(input)
}

/// Parse an escape sequence: \" \\ \n \t
fn escaped_char(input: &mut &str) -> ModalResult<char> {
    preceded(
        '\\',
        alt(('"'.value('"'), '\\'.value('\\'), 'n'.value('\n'), 't'.value('\t'))),
    )
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_counts_lines_and_columns() {
        let input = "a\nbc";
        assert_eq!(calculate_position(input, "c"), (2, 2));
        assert_eq!(calculate_position(input, input), (1, 1));
    }

    #[test]
    fn escapes_are_decoded() {
        let defs = parse_constants(r#"Q = "say \"hi\"\n";"#).unwrap();
        assert_eq!(defs[0].value, "say \"hi\"\n");
    }

    #[test]
    fn trailing_garbage_is_reported() {
        let err = parse_constants("A = \"1\"; B =").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 1, .. }));
    }
}
