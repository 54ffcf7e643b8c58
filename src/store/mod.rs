//! Ticket event store
//!
//! Creation and status-change events live in a SQLite database
//! (`~/.ticketgraph/tickets.db` by default). The store is write-light and
//! read-heavy: the graph recomputes from source events on every request,
//! and nothing derived is ever persisted.
//!
//! # Usage
//!
//! ```ignore
//! let store = TicketStore::open_default()?;
//!
//! // Record events
//! store.recorder().record_ticket(&ticket)?;
//!
//! // Query day buckets for the graph
//! let opened = store.query().opened_by_day(start_us, end_us, None)?;
//! ```

mod db;
mod models;
mod queries;
mod recorder;

pub use db::TicketDb;
pub use models::{
    ImportFile, StatusChangeRecord, TicketRecord, STATUS_CLOSED, STATUS_REOPENED,
};
pub use queries::TicketQuery;
pub use recorder::TicketRecorder;

use std::path::Path;

use anyhow::Result;

/// Central handle for the ticket event store
///
/// Coordinates recording and querying of events. Thread-safe through an
/// internal mutex on the database connection; concurrent requests share
/// no aggregation state.
#[derive(Clone)]
pub struct TicketStore {
    db: TicketDb,
}

impl TicketStore {
    /// Open the store at the default location
    pub fn open_default() -> Result<Self> {
        let db = TicketDb::open_default()?;
        Ok(Self { db })
    }

    /// Open the store at a custom path
    pub fn with_path(path: &Path) -> Result<Self> {
        let db = TicketDb::open(path)?;
        Ok(Self { db })
    }

    /// Get a recorder for writing events
    pub fn recorder(&self) -> TicketRecorder {
        TicketRecorder::new(self.db.clone())
    }

    /// Get a query interface for reading events
    pub fn query(&self) -> TicketQuery {
        TicketQuery::new(self.db.clone())
    }

    /// Delete all event data
    pub fn reset_all(&self) -> Result<()> {
        self.db.reset_all()
    }
}
