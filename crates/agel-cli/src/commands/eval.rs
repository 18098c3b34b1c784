//! Implementation of the `agel eval` command.

use std::path::PathBuf;

use agel::interpreter::DEFAULT_MAX_DEPTH;
use agel::{Agel, Constants};
use serde::Serialize;

use super::read_definitions;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// String to evaluate, e.g. "#{1 + 2 * 3}"
    pub expression: String,

    /// Constants file to resolve $CONSTANTS.NAME$ references against
    #[arg(long)]
    pub constants: Option<PathBuf>,

    /// Constants in NAME=VALUE format (repeatable, overrides the file)
    #[arg(short = 'c', long = "constant", value_parser = parse_key_val)]
    pub overrides: Vec<(String, String)>,

    /// Maximum nesting of constant references
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

/// Parse a NAME=VALUE constant string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid constant format '{}': expected NAME=VALUE", s))?;
    Ok((name.to_string(), value.to_string()))
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let mut constants: Constants = match &args.constants {
        Some(path) => read_definitions(path)?
            .into_iter()
            .map(|def| (def.name, def.value))
            .collect(),
        None => Constants::new(),
    };
    for (name, value) in args.overrides {
        constants.insert(name, value);
    }

    let agel = Agel::builder().max_depth(args.max_depth).build();

    match agel.eval(&args.expression, &mut constants) {
        Ok(result) => {
            if args.json {
                let output = EvalResult { result };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("Evaluation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_val_splits_on_first_equals() {
        assert_eq!(
            parse_key_val("C2=#{1 == 1 ? a : b}"),
            Ok(("C2".to_string(), "#{1 == 1 ? a : b}".to_string()))
        );
        assert_eq!(
            parse_key_val("EQ=a=b"),
            Ok(("EQ".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_val("missing").is_err());
    }
}
