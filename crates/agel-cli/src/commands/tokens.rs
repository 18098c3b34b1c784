//! Implementation of the `agel tokens` command.

use agel::parser::{logic_body, tokenize};
use agel_semantics::{resolve_operator, OperatorId};
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

/// Arguments for the tokens command.
#[derive(Debug, clap::Args)]
pub struct TokensArgs {
    /// Logic expression body, with or without the surrounding #{ }
    pub body: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single token.
#[derive(Debug, Serialize)]
struct TokenJson<'a> {
    token: &'a str,
    /// Operator family, absent for operands.
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<u8>,
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> miette::Result<i32> {
    let tokens = tokenize(logic_body(args.body.trim()));

    if args.json {
        let json: Vec<TokenJson<'_>> = tokens
            .iter()
            .map(|&token| {
                let operator = resolve_operator(token);
                TokenJson {
                    token,
                    kind: operator.map(|id| format!("{:?}", id.kind()).to_lowercase()),
                    priority: operator.map(OperatorId::priority),
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        for &token in &tokens {
            match resolve_operator(token) {
                Some(id) => println!(
                    "{}\t{}",
                    token.if_supports_color(Stream::Stdout, OwoColorize::cyan),
                    id.priority()
                ),
                None => println!("{}", token),
            }
        }
    }

    Ok(exitcode::OK)
}
