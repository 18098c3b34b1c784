//! Table formatting utilities for CLI output.

use agel::parser::ConstantDefinition;
use comfy_table::{presets, ContentArrangement, Table};

/// Resolution outcome for a single constant.
pub struct ConstantStatus {
    /// The definition as written in the file.
    pub definition: ConstantDefinition,
    /// Fully resolved value, or the error message.
    pub outcome: Result<String, String>,
}

/// Format check results as a table.
pub fn format_check_table(statuses: &[ConstantStatus]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Constant", "Line", "Status", "Resolved"]);

    for status in statuses {
        let (label, detail) = match &status.outcome {
            Ok(value) => ("ok", value.clone()),
            Err(message) => ("error", message.clone()),
        };
        table.add_row(vec![
            status.definition.name.clone(),
            status.definition.line.to_string(),
            label.to_string(),
            detail,
        ]);
    }

    table
}
