//! Implementation of the `agel check` command.

use std::path::PathBuf;

use agel::parser::ConstantDefinition;
use agel::{Agel, Constants};
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::read_definitions;
use crate::output::table::{format_check_table, ConstantStatus};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Constants file to check
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if any constant fails to resolve
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for one constant.
#[derive(Debug, Serialize)]
struct CheckJson<'a> {
    #[serde(flatten)]
    definition: &'a ConstantDefinition,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Resolve every definition against its own copy of the file's table, so
/// one constant's memoized value never hides another's failure.
fn resolve_all(definitions: Vec<ConstantDefinition>) -> Vec<ConstantStatus> {
    let table: Constants = definitions
        .iter()
        .map(|def| (def.name.clone(), def.value.clone()))
        .collect();
    let agel = Agel::new();

    definitions
        .into_iter()
        .map(|definition| {
            let mut scratch = table.clone();
            let reference = format!("$CONSTANTS.{}$", definition.name);
            let outcome = agel
                .eval(&reference, &mut scratch)
                .map_err(|error| error.to_string());
            ConstantStatus {
                definition,
                outcome,
            }
        })
        .collect()
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let definitions = read_definitions(&args.file)?;
    let statuses = resolve_all(definitions);
    let failed = statuses.iter().filter(|s| s.outcome.is_err()).count();

    if args.json {
        let json: Vec<CheckJson<'_>> = statuses
            .iter()
            .map(|status| CheckJson {
                definition: &status.definition,
                resolved: status.outcome.as_deref().ok(),
                error: status.outcome.as_ref().err().map(String::as_str),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        println!("{}", format_check_table(&statuses));
        let summary = format!("{} constants, {} failed", statuses.len(), failed);
        if failed == 0 {
            println!("{}", summary.if_supports_color(Stream::Stdout, OwoColorize::green));
        } else {
            println!("{}", summary.if_supports_color(Stream::Stdout, OwoColorize::red));
        }
    }

    if args.strict && failed > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
