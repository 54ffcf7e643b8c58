//! Write path for the ticket event store

use anyhow::Result;

use super::db::TicketDb;
use super::models::{StatusChangeRecord, TicketRecord};

/// Records ticket events into the store
#[derive(Clone)]
pub struct TicketRecorder {
    db: TicketDb,
}

impl TicketRecorder {
    pub fn new(db: TicketDb) -> Self {
        Self { db }
    }

    /// Record a ticket creation event
    ///
    /// The ticket's component is upserted into the component registry so
    /// the selectable filter list stays in sync with the data.
    pub fn record_ticket(&self, record: &TicketRecord) -> Result<()> {
        let conn = self.db.conn();
        conn.execute(
            r#"INSERT OR REPLACE INTO ticket (id, time, component, status)
               VALUES (?1, ?2, ?3, ?4)"#,
            rusqlite::params![record.id, record.time_us, record.component, record.status],
        )?;

        if let Some(component) = &record.component {
            conn.execute(
                "INSERT OR IGNORE INTO component (name) VALUES (?1)",
                rusqlite::params![component],
            )?;
        }
        Ok(())
    }

    /// Record a status change event
    ///
    /// Appends to the change history and moves the ticket's current
    /// status, keeping the live open count consistent with the log.
    pub fn record_status_change(&self, record: &StatusChangeRecord) -> Result<()> {
        let conn = self.db.conn();
        conn.execute(
            r#"INSERT INTO ticket_change (ticket, time, field, newvalue)
               VALUES (?1, ?2, 'status', ?3)"#,
            rusqlite::params![record.ticket_id, record.time_us, record.status],
        )?;
        conn.execute(
            "UPDATE ticket SET status = ?1 WHERE id = ?2",
            rusqlite::params![record.status, record.ticket_id],
        )?;
        Ok(())
    }

    /// Register a component that no ticket references yet
    pub fn record_component(&self, name: &str) -> Result<()> {
        let conn = self.db.conn();
        conn.execute(
            "INSERT OR IGNORE INTO component (name) VALUES (?1)",
            rusqlite::params![name],
        )?;
        Ok(())
    }
}
