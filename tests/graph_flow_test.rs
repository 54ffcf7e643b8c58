//! Integration tests for the full store -> aggregation -> payload flow

use chrono::NaiveDate;
use tempfile::TempDir;

use ticketgraph::graph::{build_graph_at, day_start_ms, GraphRequest, DAY_MS};
use ticketgraph::store::{
    StatusChangeRecord, TicketRecord, TicketStore, STATUS_CLOSED, STATUS_REOPENED,
};

/// Anchor day for every test: 2024-03-10 00:00 UTC
fn today_ms() -> i64 {
    day_start_ms(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
}

/// Microsecond timestamp inside the day that starts at `day_ms` (09:00 UTC)
fn mid_day_us(day_ms: i64) -> i64 {
    day_ms * 1000 + 32_400_000_000
}

fn ticket(id: u64, day_ms: i64, component: &str) -> TicketRecord {
    TicketRecord {
        id,
        time_us: mid_day_us(day_ms),
        component: Some(component.to_string()),
        status: "new".to_string(),
    }
}

fn change(ticket_id: u64, day_ms: i64, status: &str) -> StatusChangeRecord {
    StatusChangeRecord {
        ticket_id,
        time_us: mid_day_us(day_ms),
        status: status.to_string(),
    }
}

/// Seed a store with a week of activity around the anchor day.
///
/// Live open count afterwards: tickets 1, 2, 3, 5 and the reopened 7 = 5.
fn seeded_store(dir: &TempDir) -> TicketStore {
    let store = TicketStore::with_path(&dir.path().join("tickets.db")).expect("open store");
    let recorder = store.recorder();
    let t = today_ms();

    let tickets = [
        ticket(1, t - 10 * DAY_MS, "database"),
        ticket(2, t - 3 * DAY_MS, "database"),
        ticket(3, t - 3 * DAY_MS, "ui"),
        ticket(4, t - 2 * DAY_MS, "database"),
        ticket(5, t - DAY_MS, "database"),
        ticket(6, t - 20 * DAY_MS, "ui"),
        ticket(7, t - 15 * DAY_MS, "ui"),
    ];
    for record in &tickets {
        recorder.record_ticket(record).expect("record ticket");
    }

    let changes = [
        change(4, t - DAY_MS, STATUS_CLOSED),
        change(6, t - 2 * DAY_MS, STATUS_CLOSED),
        change(7, t - 9 * DAY_MS, STATUS_CLOSED),
        change(7, t - 4 * DAY_MS, STATUS_REOPENED),
    ];
    for record in &changes {
        recorder.record_status_change(record).expect("record change");
    }

    store
}

#[test]
fn test_opened_sum_matches_distinct_creations_in_window() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    let request = GraphRequest {
        days: 7,
        component: String::new(),
    };
    let data = build_graph_at(&store, &request, today_ms()).expect("build graph");

    let opened_sum: f64 = data.opened_tickets.iter().map(|(_, count)| count).sum();
    assert_eq!(
        opened_sum, 4.0,
        "tickets 2, 3, 4 and 5 were created inside the 7-day window"
    );
}

#[test]
fn test_series_signs() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    let request = GraphRequest {
        days: 7,
        component: String::new(),
    };
    let data = build_graph_at(&store, &request, today_ms()).expect("build graph");

    assert!(
        data.closed_tickets.iter().all(|(_, count)| *count <= 0.0),
        "closed counts are stored negated for stacked rendering"
    );
    assert!(data.opened_tickets.iter().all(|(_, count)| *count >= 0.0));
    assert!(data.reopened_tickets.iter().all(|(_, count)| *count >= 0.0));
}

#[test]
fn test_open_series_walks_backward_from_live_count() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);
    let t = today_ms();

    let request = GraphRequest {
        days: 7,
        component: String::new(),
    };
    let data = build_graph_at(&store, &request, t).expect("build graph");

    // One point per day from the window start up to "tomorrow"
    let expected: Vec<(i64, f64)> = vec![
        (t - 7 * DAY_MS, 2.0),
        (t - 6 * DAY_MS, 2.0),
        (t - 5 * DAY_MS, 2.0),
        (t - 4 * DAY_MS, 2.0), // ticket 7's reopen undone
        (t - 3 * DAY_MS, 3.0), // two creations undone
        (t - 2 * DAY_MS, 5.0), // one creation and one closure undone
        (t - DAY_MS, 5.0),     // one creation and one closure undone
        (t, 5.0),
        (t + DAY_MS, 5.0), // live open count: tickets 1, 2, 3, 5, 7
    ];
    assert_eq!(data.open_tickets, expected);
}

#[test]
fn test_component_filter_restricts_all_series() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);
    let t = today_ms();

    let request = GraphRequest {
        days: 7,
        component: "database".to_string(),
    };
    let data = build_graph_at(&store, &request, t).expect("build graph");

    assert_eq!(
        data.opened_tickets,
        vec![
            (t - 3 * DAY_MS, 1.0),
            (t - 2 * DAY_MS, 1.0),
            (t - DAY_MS, 1.0),
        ],
        "only database tickets count toward opened"
    );
    assert_eq!(
        data.closed_tickets,
        vec![(t - DAY_MS, -1.0)],
        "ticket 6's closure belongs to the ui component"
    );
    assert!(
        data.reopened_tickets.is_empty(),
        "the only reopen is on a ui ticket"
    );
    assert_eq!(data.component, "database");
    assert_eq!(
        data.components,
        vec!["database".to_string(), "ui".to_string()]
    );
}

#[test]
fn test_unknown_component_is_cleared_not_rejected() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);
    let t = today_ms();

    let unfiltered = build_graph_at(
        &store,
        &GraphRequest {
            days: 7,
            component: String::new(),
        },
        t,
    )
    .expect("build graph");
    let unknown = build_graph_at(
        &store,
        &GraphRequest {
            days: 7,
            component: "embedded".to_string(),
        },
        t,
    )
    .expect("build graph");

    assert_eq!(unknown.component, "", "unknown component degrades to no filter");
    assert_eq!(unknown.opened_tickets, unfiltered.opened_tickets);
    assert_eq!(unknown.closed_tickets, unfiltered.closed_tickets);
    assert_eq!(unknown.reopened_tickets, unfiltered.reopened_tickets);
    assert_eq!(unknown.open_tickets, unfiltered.open_tickets);
}

#[test]
fn test_payload_serializes_with_chart_field_names() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    let data = build_graph_at(
        &store,
        &GraphRequest {
            days: 7,
            component: String::new(),
        },
        today_ms(),
    )
    .expect("build graph");

    let json = serde_json::to_value(&data).expect("serialize payload");
    for key in [
        "openedTickets",
        "closedTickets",
        "reopenedTickets",
        "openTickets",
        "days",
        "component",
        "components",
    ] {
        assert!(json.get(key).is_some(), "payload is missing key {}", key);
    }
}
