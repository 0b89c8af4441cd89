//! Output formatting utilities.

use serde_json::Value;

/// Formats a value as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats one field of a validation report as a table row.
pub fn format_field_row(field: &str, value: Option<&Value>, problem: Option<String>) -> String {
    let rendered = value.map_or_else(|| "<absent>".to_string(), Value::to_string);
    let status = if problem.is_none() { "ok" } else { "INVALID" };
    format!(
        "{:<20} {:<8} {:<40} {}",
        field,
        status,
        truncate(&rendered, 40),
        problem.unwrap_or_default()
    )
}

/// Prints the validation table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<20} {:<8} {:<40} {}", "FIELD", "STATUS", "VALUE", "PROBLEM");
    println!("{}", "-".repeat(90));
}

/// Formats one revert reason as a table row.
pub fn format_reason_row(name: &str, message: &str) -> String {
    format!("{:<24} {}", name, message)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
