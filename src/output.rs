//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use serde_json::Value;
use tabled::{Table, Tabled};

use backoffice_core::types::Page;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Summary row for one stored document
#[derive(Debug, Serialize, Tabled)]
pub struct DocumentRow {
    /// Document ID
    id: String,
    /// Merchant
    merchant_id: String,
    /// Display name, when the schema has one
    name: String,
    /// Status flag
    status: String,
    /// Last update
    updated_at: String,
}

impl DocumentRow {
    fn from_value(value: &Value) -> Self {
        let text = |key: &str| match value.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Self {
            id: text("id"),
            merchant_id: text("merchant_id"),
            name: text("name"),
            status: text("status"),
            updated_at: text("updated_at"),
        }
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a page of documents with its `Content-Range` line
pub fn print_page(page: &Page<Value>, resource: &str, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows: Vec<DocumentRow> = page.items.iter().map(DocumentRow::from_value).collect();
            print_list(&rows, format);
            print_kv("Content-Range", &page.content_range(resource));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(page).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => match serde_json::to_value(item) {
            Ok(Value::Object(fields)) => {
                for (key, value) in &fields {
                    print_kv(key, &value.to_string());
                }
            }
            _ => print_warning("Item is not a document"),
        },
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
