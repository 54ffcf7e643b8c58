//! Read path for the ticket event store
//!
//! Day grouping happens in SQL: the store keeps microsecond timestamps,
//! and the truncation expression `(time / 86400000000) * 86400000` hands
//! millisecond day-bucket keys to the aggregation layer, so only one time
//! unit crosses the store boundary.

use anyhow::Result;

use super::db::TicketDb;
use super::models::STATUS_CLOSED;
use crate::graph::DaySeries;

/// Query interface over the event store
pub struct TicketQuery {
    db: TicketDb,
}

impl TicketQuery {
    pub fn new(db: TicketDb) -> Self {
        Self { db }
    }

    /// Distinct tickets created per day within `[start_us, end_us)`,
    /// optionally filtered by component.
    pub fn opened_by_day(
        &self,
        start_us: i64,
        end_us: i64,
        component: Option<&str>,
    ) -> Result<DaySeries> {
        let conn = self.db.conn();
        if let Some(component) = component {
            let mut stmt = conn.prepare(
                "SELECT COUNT(DISTINCT id), CAST(time / 86400000000 AS INTEGER) * 86400000 AS day \
                 FROM ticket WHERE time >= ?1 AND time < ?2 AND component = ?3 \
                 GROUP BY day",
            )?;
            let rows = stmt.query_map(rusqlite::params![start_us, end_us, component], |row| {
                Ok((row.get::<_, f64>(0)?, row.get::<_, i64>(1)?))
            })?;
            collect_series(rows)
        } else {
            let mut stmt = conn.prepare(
                "SELECT COUNT(DISTINCT id), CAST(time / 86400000000 AS INTEGER) * 86400000 AS day \
                 FROM ticket WHERE time >= ?1 AND time < ?2 \
                 GROUP BY day",
            )?;
            let rows = stmt.query_map(rusqlite::params![start_us, end_us], |row| {
                Ok((row.get::<_, f64>(0)?, row.get::<_, i64>(1)?))
            })?;
            collect_series(rows)
        }
    }

    /// Distinct tickets with a status change to `new_status` per day, for
    /// change timestamps `>= start_us` (no upper bound).
    ///
    /// The component filter joins on the ticket's *current* component, not
    /// the component at the time of the change.
    pub fn status_changes_by_day(
        &self,
        new_status: &str,
        start_us: i64,
        component: Option<&str>,
    ) -> Result<DaySeries> {
        let conn = self.db.conn();
        if let Some(component) = component {
            let mut stmt = conn.prepare(
                "SELECT COUNT(DISTINCT tc.ticket), CAST(tc.time / 86400000000 AS INTEGER) * 86400000 AS day \
                 FROM ticket_change tc INNER JOIN ticket t ON tc.ticket = t.id \
                 WHERE tc.field = 'status' AND tc.newvalue = ?1 AND tc.time >= ?2 AND t.component = ?3 \
                 GROUP BY day",
            )?;
            let rows = stmt.query_map(rusqlite::params![new_status, start_us, component], |row| {
                Ok((row.get::<_, f64>(0)?, row.get::<_, i64>(1)?))
            })?;
            collect_series(rows)
        } else {
            let mut stmt = conn.prepare(
                "SELECT COUNT(DISTINCT ticket), CAST(time / 86400000000 AS INTEGER) * 86400000 AS day \
                 FROM ticket_change \
                 WHERE field = 'status' AND newvalue = ?1 AND time >= ?2 \
                 GROUP BY day",
            )?;
            let rows = stmt.query_map(rusqlite::params![new_status, start_us], |row| {
                Ok((row.get::<_, f64>(0)?, row.get::<_, i64>(1)?))
            })?;
            collect_series(rows)
        }
    }

    /// Number of tickets currently not closed (live snapshot, no time filter)
    pub fn open_ticket_count(&self) -> Result<u64> {
        let conn = self.db.conn();
        let count: u64 = conn.query_row(
            "SELECT COUNT(*) FROM ticket WHERE status <> ?1",
            rusqlite::params![STATUS_CLOSED],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Whether a component name exists in the registry
    pub fn component_exists(&self, name: &str) -> Result<bool> {
        let conn = self.db.conn();
        let count: u32 = conn.query_row(
            "SELECT COUNT(*) FROM component WHERE name = ?1",
            rusqlite::params![name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Full list of known component names (for the filter form)
    pub fn component_names(&self) -> Result<Vec<String>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare("SELECT name FROM component ORDER BY name")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        Ok(rows.filter_map(|r| r.ok()).collect())
    }
}

fn collect_series<I>(rows: I) -> Result<DaySeries>
where
    I: Iterator<Item = rusqlite::Result<(f64, i64)>>,
{
    let mut series = DaySeries::new();
    for row in rows {
        let (count, day) = row?;
        series.set(day, count);
    }
    Ok(series)
}
