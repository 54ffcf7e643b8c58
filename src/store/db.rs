//! SQLite connection and schema management for the ticket event store

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::config::Config;

/// Database wrapper shared between the recorder and the query interface
#[derive(Clone)]
pub struct TicketDb {
    conn: Arc<Mutex<Connection>>,
}

impl TicketDb {
    /// Open or create the event store at the default location (~/.ticketgraph/tickets.db)
    pub fn open_default() -> Result<Self> {
        let db_path = Config::global_data_dir().join("tickets.db");
        Self::open(&db_path)
    }

    /// Open or create the event store at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open ticket db: {}", path.display()))?;

        // WAL so the HTTP server can keep reading while an import runs
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Get a reference to the connection (for queries)
    pub fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().expect("Ticket DB lock poisoned")
    }

    /// Initialize the database schema
    fn init_schema(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Delete all event data (reset to empty state)
    pub fn reset_all(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(
            r#"
            DELETE FROM ticket_change;
            DELETE FROM ticket;
            DELETE FROM component;
            "#,
        )?;
        Ok(())
    }
}

/// SQL schema for the event store
///
/// Timestamps are microseconds since the Unix epoch; the read path converts
/// to millisecond day buckets at the query boundary.
const SCHEMA_SQL: &str = r#"
-- Tickets: the creation row is the creation event, status tracks the present
CREATE TABLE IF NOT EXISTS ticket (
    id INTEGER PRIMARY KEY,
    time INTEGER NOT NULL,
    component TEXT,
    status TEXT NOT NULL DEFAULT 'new'
);
CREATE INDEX IF NOT EXISTS idx_ticket_time ON ticket(time);
CREATE INDEX IF NOT EXISTS idx_ticket_component ON ticket(component);
CREATE INDEX IF NOT EXISTS idx_ticket_status ON ticket(status);

-- Field change history (only status changes are read back today)
CREATE TABLE IF NOT EXISTS ticket_change (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ticket INTEGER NOT NULL REFERENCES ticket(id),
    time INTEGER NOT NULL,
    field TEXT NOT NULL,
    newvalue TEXT
);
CREATE INDEX IF NOT EXISTS idx_change_field_time ON ticket_change(field, time);
CREATE INDEX IF NOT EXISTS idx_change_ticket ON ticket_change(ticket);

-- Known components (the selectable filter list)
CREATE TABLE IF NOT EXISTS component (
    name TEXT PRIMARY KEY
);
"#;
