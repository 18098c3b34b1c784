//! Miette diagnostic wrapper for constants file parse errors.

use std::path::Path;

use agel::parser::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for constants file parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(agel::constants))]
pub struct AgelDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,

    label: String,

    #[help]
    help: Option<String>,
}

impl AgelDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        let (message, label, help) = match err {
            ParseError::Syntax { message, .. } => (
                format!("syntax error: {message}"),
                "error here".to_string(),
                Some(r#"definitions look like NAME = "value";"#.to_string()),
            ),
            ParseError::DuplicateConstant { name, .. } => (
                format!("duplicate constant '{name}'"),
                "defined again here".to_string(),
                Some("each constant name may only be defined once".to_string()),
            ),
        };

        // Convert line:column to byte offset.
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        AgelDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            label,
            help,
        }
    }
}
