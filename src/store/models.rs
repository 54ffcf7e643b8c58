//! Data models for the ticket event store

use serde::{Deserialize, Serialize};

/// Status value marking a ticket as closed
pub const STATUS_CLOSED: &str = "closed";

/// Status value marking a ticket as reopened
pub const STATUS_REOPENED: &str = "reopened";

/// A ticket creation event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRecord {
    pub id: u64,
    /// Creation timestamp, microseconds since epoch
    pub time_us: i64,
    /// Component tag; None for uncategorized tickets
    pub component: Option<String>,
    /// Status at creation ("new" unless the source says otherwise)
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "new".to_string()
}

/// A status change event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChangeRecord {
    pub ticket_id: u64,
    /// Change timestamp, microseconds since epoch
    pub time_us: i64,
    /// New status value (e.g. "closed", "reopened")
    pub status: String,
}

/// Bulk import document (`ticketgraph import <file.json>`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportFile {
    /// Components to register even when no ticket references them yet
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub tickets: Vec<TicketRecord>,
    #[serde(default)]
    pub changes: Vec<StatusChangeRecord>,
}
