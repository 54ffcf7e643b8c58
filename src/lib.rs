//! TicketGraph - daily ticket statistics for issue trackers
//!
//! TicketGraph reads ticket creation and status-change events from a SQLite
//! event store, groups them into UTC day buckets (opened / closed /
//! reopened), reconstructs the historical open-ticket count backward from
//! the live total, and hands the series to a client-side charting layer as
//! ordered `(timestamp_ms, value)` pairs.
//!
//! ## Pipeline
//!
//! 1. **Aggregate**: count distinct tickets per UTC day over the requested
//!    trailing window, optionally filtered by component.
//! 2. **Reconstruct**: walk backward from "tomorrow" undoing each day's
//!    deltas to recover what was open on each prior day.
//! 3. **Shape**: sort each series by timestamp and emit chart-ready pairs
//!    plus the filter metadata.
//!
//! Everything is recomputed from source events on every request; no
//! aggregation state persists between requests.

pub mod config;
pub mod graph;
pub mod server;
pub mod store;
