//! Backward reconstruction of the open-ticket series
//!
//! The store can answer "how many tickets are open right now" but not "how
//! many were open N days ago". The walk starts from the live count and
//! undoes each day's opened/closed/reopened deltas while stepping backward
//! through the window, one fixed day at a time.

use super::series::DaySeries;
use super::time_bucket::DAY_MS;
use super::window::GraphWindow;

/// Derive the historical open-ticket series from the live open count.
///
/// Walks from `window.end_ms` down to `window.start_ms` (both inclusive,
/// both day-aligned bucket keys). For each day the day's deltas are
/// subtracted first and the adjusted total is then recorded, so the value
/// stored for a day reflects the open count at the end of that day.
/// Closed counts arrive negated, which makes their subtraction an
/// addition: undoing a closure restores an open ticket.
///
/// Reopens are subtracted as well, matching the chart's historical
/// output, even though a reopen does not change the open/closed partition
/// by itself.
///
/// Reconstruction cannot fail. Inconsistent upstream data can drive the
/// running total negative; it is recorded as-is, neither checked nor
/// clamped.
pub fn reconstruct_open_tickets(
    open_now: f64,
    opened: &DaySeries,
    closed: &DaySeries,
    reopened: &DaySeries,
    window: GraphWindow,
) -> DaySeries {
    let mut open_tickets = open_now;
    let mut series = DaySeries::new();

    let mut day = window.end_ms;
    while day >= window.start_ms {
        if let Some(count) = closed.get(day) {
            open_tickets -= count;
        }
        if let Some(count) = opened.get(day) {
            open_tickets -= count;
        }
        if let Some(count) = reopened.get(day) {
            open_tickets -= count;
        }

        series.set(day, open_tickets);
        day -= DAY_MS;
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(days: u32) -> GraphWindow {
        // Anchor at an arbitrary day-aligned "today"
        GraphWindow::anchored(19_800 * DAY_MS, days)
    }

    #[test]
    fn test_empty_series_yield_constant_open_count() {
        let empty = DaySeries::new();
        let window = window(5);

        let open = reconstruct_open_tickets(42.0, &empty, &empty, &empty, window);

        // One entry per day from "tomorrow" back to the window start
        assert_eq!(open.len(), 7);
        let mut day = window.end_ms;
        while day >= window.start_ms {
            assert_eq!(open.get(day), Some(42.0));
            day -= DAY_MS;
        }
    }

    #[test]
    fn test_day_deltas_are_undone_before_recording() {
        // Day D: 3 opened, 1 closed (stored as -1), 0 reopened.
        // Day D-1: no events. Live open count: 10.
        let window = window(1);
        let day_d = window.end_ms - DAY_MS;

        let mut opened = DaySeries::new();
        opened.set(day_d, 3.0);
        let mut closed = DaySeries::new();
        closed.set(day_d, -1.0);
        let reopened = DaySeries::new();

        let open = reconstruct_open_tickets(10.0, &opened, &closed, &reopened, window);

        assert_eq!(open.get(window.end_ms), Some(10.0));
        assert_eq!(open.get(day_d), Some(8.0));
        assert_eq!(open.get(day_d - DAY_MS), Some(8.0));
    }

    #[test]
    fn test_reopens_decrement_the_running_total() {
        let window = window(2);
        let day = window.start_ms + DAY_MS;

        let mut reopened = DaySeries::new();
        reopened.set(day, 2.0);
        let empty = DaySeries::new();

        let open = reconstruct_open_tickets(5.0, &empty, &empty, &reopened, window);

        assert_eq!(open.get(window.end_ms), Some(5.0));
        assert_eq!(open.get(day), Some(3.0));
        assert_eq!(open.get(window.start_ms), Some(3.0));
    }

    #[test]
    fn test_inconsistent_data_may_go_negative() {
        let window = window(0);
        let day = window.start_ms;

        let mut opened = DaySeries::new();
        opened.set(day, 9.0);
        let empty = DaySeries::new();

        let open = reconstruct_open_tickets(4.0, &opened, &empty, &empty, window);

        assert_eq!(open.get(day), Some(-5.0));
    }
}
