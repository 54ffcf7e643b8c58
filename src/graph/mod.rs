//! Daily ticket time series
//!
//! Two passes per request. The aggregator groups creation and status-change
//! events into UTC day buckets, producing the opened / closed / reopened
//! counter series; the backward reconstructor then derives the open-ticket
//! series by walking from the live open count back through each day's
//! deltas. A final shaping step sorts every series by timestamp for the
//! chart frontend.

mod reconstruct;
mod series;
mod time_bucket;
mod window;

pub use reconstruct::reconstruct_open_tickets;
pub use series::{DaySeries, SeriesPoint};
pub use time_bucket::{day_bucket_ms, day_start_ms, today_start_ms, DAY_MS, DAY_US};
pub use window::{GraphRequest, GraphWindow, ParamError, DEFAULT_DAYS};

use anyhow::Result;
use serde::Serialize;

use crate::store::{TicketStore, STATUS_CLOSED, STATUS_REOPENED};

/// Complete graph payload for the chart frontend
///
/// Field names match what the chart scripts expect. Closed counts are
/// negative so that series stacks below the zero line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketGraphData {
    pub opened_tickets: Vec<SeriesPoint>,
    pub closed_tickets: Vec<SeriesPoint>,
    pub reopened_tickets: Vec<SeriesPoint>,
    pub open_tickets: Vec<SeriesPoint>,

    /// Resolved trailing window length
    pub days: u32,
    /// Resolved component filter; cleared when the requested name is unknown
    pub component: String,
    /// Full list of known components, for the filter form
    pub components: Vec<String>,
}

/// Compute the full graph payload for a request, anchored at the current day.
pub fn build_graph(store: &TicketStore, request: &GraphRequest) -> Result<TicketGraphData> {
    build_graph_at(store, request, today_start_ms())
}

/// Compute the payload with an explicit "today" anchor (UTC midnight, ms).
pub fn build_graph_at(
    store: &TicketStore,
    request: &GraphRequest,
    today_start_ms: i64,
) -> Result<TicketGraphData> {
    let query = store.query();

    // Unknown component names degrade to "no filter" rather than erroring
    let component = if !request.component.is_empty() && query.component_exists(&request.component)? {
        request.component.as_str()
    } else {
        ""
    };
    let filter = if component.is_empty() {
        None
    } else {
        Some(component)
    };

    let window = GraphWindow::anchored(today_start_ms, request.days);

    let opened = query.opened_by_day(window.start_us(), window.end_us(), filter)?;
    let reopened = query.status_changes_by_day(STATUS_REOPENED, window.start_us(), filter)?;
    let mut closed = query.status_changes_by_day(STATUS_CLOSED, window.start_us(), filter)?;
    closed.negate();

    let open_now = query.open_ticket_count()? as f64;
    let open = reconstruct_open_tickets(open_now, &opened, &closed, &reopened, window);

    Ok(TicketGraphData {
        opened_tickets: opened.sorted_points(),
        closed_tickets: closed.sorted_points(),
        reopened_tickets: reopened.sorted_points(),
        open_tickets: open.sorted_points(),
        days: request.days,
        component: component.to_string(),
        components: query.component_names()?,
    })
}
