//! CLI command implementations.

mod check;
mod eval;
mod tokens;

use std::fs::read_to_string;
use std::path::Path;

use agel::parser::{parse_constants, ConstantDefinition};
use miette::{miette, IntoDiagnostic, Result};

use crate::output::AgelDiagnostic;

pub use check::{run_check, CheckArgs};
pub use eval::{run_eval, EvalArgs};
pub use tokens::{run_tokens, TokensArgs};

/// Read and parse a constants file, rendering syntax errors with source
/// context.
fn read_definitions(path: &Path) -> Result<Vec<ConstantDefinition>> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read constants file {}: {}", path.display(), e))?;

    parse_constants(&content)
        .map_err(|e| AgelDiagnostic::from_parse_error(path, &content, &e).into())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn definitions_are_read_in_file_order() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"B = "2";"#).unwrap();
        writeln!(file, r#"A = "1";"#).unwrap();
        file.flush().unwrap();

        let definitions = read_definitions(file.path()).unwrap();
        let names: Vec<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn syntax_errors_become_diagnostics() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"A = 1;"#).unwrap();
        file.flush().unwrap();

        let report = read_definitions(file.path()).unwrap_err();
        assert!(report.to_string().starts_with("syntax error"));
    }

    #[test]
    fn missing_file_is_reported() {
        assert!(read_definitions(Path::new("/nonexistent/constants.agel")).is_err());
    }
}
