//! Resource catalog command.

use serde::Serialize;
use tabled::Tabled;

use backoffice_core::error::AppError;
use backoffice_entity::ResourceKind;

use crate::output::{self, OutputFormat};

/// Resource display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ResourceRow {
    /// Name accepted on the command line
    resource: &'static str,
    /// Model name
    model: &'static str,
    /// Physical collection
    collection: &'static str,
    /// Filter key that expands references
    reference_key: &'static str,
}

/// Execute `resources`
pub fn execute(format: OutputFormat) -> Result<(), AppError> {
    let rows: Vec<ResourceRow> = ResourceKind::ALL
        .iter()
        .map(|kind| {
            let descriptor = kind.descriptor();
            ResourceRow {
                resource: kind.as_str(),
                model: descriptor.model,
                collection: descriptor.collection,
                reference_key: descriptor.reference_key,
            }
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
