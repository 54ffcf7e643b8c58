//! HTTP server handing the graph to the chart frontend
//!
//! Listens on localhost and accepts:
//! - GET /graph?days=N&component=NAME - full graph payload as JSON
//! - GET /ping - health probe
//!
//! When a token is configured, every request must carry it in the
//! `X-TicketGraph-Token` header. The server is the hosting boundary: it
//! parses and validates request parameters before the aggregation core
//! ever runs.

use std::thread;

use tiny_http::{Response, Server};
use tracing::{error, info};

use crate::graph::{self, GraphRequest};
use crate::store::TicketStore;

const AUTH_HEADER: &str = "X-TicketGraph-Token";

/// Start the HTTP server in a background thread
/// Returns immediately, server runs until the program exits
pub fn start_http_server(store: TicketStore, port: u16, auth_token: Option<String>) {
    thread::spawn(move || {
        let bind_addr = format!("127.0.0.1:{}", port);
        let server = match Server::http(&bind_addr) {
            Ok(s) => {
                let auth_enabled = auth_token
                    .as_deref()
                    .map_or(false, |t| !t.trim().is_empty());
                info!(
                    "[ticketgraph:http] Server listening on http://{} (auth: {})",
                    bind_addr,
                    if auth_enabled { "enabled" } else { "disabled" }
                );
                s
            }
            Err(e) => {
                error!(
                    "[ticketgraph:http] Failed to start server on {}: {}",
                    bind_addr, e
                );
                return;
            }
        };

        for request in server.incoming_requests() {
            let method = request.method().to_string();
            let url = request.url().to_string();
            let (path, query) = split_url(&url);

            if !is_authorized(&request, auth_token.as_deref()) {
                respond_json(request, 401, serde_json::json!({ "error": "unauthorized" }));
                continue;
            }

            match (method.as_str(), path) {
                ("GET", "/graph") => {
                    handle_graph_request(&store, query, request);
                }
                ("GET", "/ping") => {
                    respond_json(
                        request,
                        200,
                        serde_json::json!({
                            "status": "ok",
                            "version": env!("CARGO_PKG_VERSION"),
                        }),
                    );
                }
                _ => {
                    respond_json(request, 404, serde_json::json!({ "error": "not_found" }));
                }
            }
        }
    });
}

/// Handle GET /graph
fn handle_graph_request(store: &TicketStore, query: &str, request: tiny_http::Request) {
    let graph_request =
        match GraphRequest::from_params(query_param(query, "days"), query_param(query, "component"))
        {
            Ok(r) => r,
            Err(e) => {
                error!("[ticketgraph:http] Bad graph request: {}", e);
                respond_json(
                    request,
                    400,
                    serde_json::json!({ "error": "bad_request", "details": e.to_string() }),
                );
                return;
            }
        };

    match graph::build_graph(store, &graph_request) {
        Ok(data) => {
            info!(
                "[ticketgraph:http] Graph: days={}, component={:?}, {} opened buckets",
                data.days,
                data.component,
                data.opened_tickets.len()
            );
            respond_json(
                request,
                200,
                serde_json::to_value(&data)
                    .unwrap_or_else(|_| serde_json::json!({ "error": "serialize" })),
            );
        }
        Err(e) => {
            error!("[ticketgraph:http] Graph computation failed: {}", e);
            respond_json(
                request,
                500,
                serde_json::json!({ "error": "graph_failed", "details": e.to_string() }),
            );
        }
    }
}

fn is_authorized(request: &tiny_http::Request, expected: Option<&str>) -> bool {
    let Some(expected) = expected.filter(|t| !t.trim().is_empty()) else {
        return true;
    };

    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(AUTH_HEADER))
        .map(|h| h.value.as_str() == expected)
        .unwrap_or(false)
}

fn json_content_type() -> tiny_http::Header {
    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap()
}

fn respond_json(request: tiny_http::Request, status_code: u16, value: serde_json::Value) {
    let body =
        serde_json::to_string(&value).unwrap_or_else(|_| "{\"error\":\"serialize\"}".to_string());
    let response = Response::from_string(body)
        .with_status_code(status_code)
        .with_header(json_content_type());
    let _ = request.respond(response);
}

fn split_url(url: &str) -> (&str, &str) {
    match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    }
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == name { Some(value) } else { None }
    })
}
