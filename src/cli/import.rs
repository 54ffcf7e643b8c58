//! Import command implementation

use std::path::Path;

use anyhow::{Context, Result};

use ticketgraph::config::Config;
use ticketgraph::store::{ImportFile, TicketStore};

/// Bulk-load ticket events from a JSON document
pub async fn import_command(config: &Config, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read import file: {}", file.display()))?;
    let import: ImportFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse import file: {}", file.display()))?;

    let store = TicketStore::with_path(&config.database_path())?;
    let recorder = store.recorder();

    for component in &import.components {
        recorder.record_component(component)?;
    }
    for ticket in &import.tickets {
        recorder.record_ticket(ticket)?;
    }
    for change in &import.changes {
        recorder.record_status_change(change)?;
    }

    println!(
        "Imported {} tickets and {} status changes.",
        import.tickets.len(),
        import.changes.len()
    );
    Ok(())
}
