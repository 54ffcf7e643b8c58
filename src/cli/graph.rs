//! Graph command implementation

use anyhow::Result;

use ticketgraph::config::Config;
use ticketgraph::graph::{build_graph, GraphRequest};
use ticketgraph::store::TicketStore;

/// Compute the graph payload once and print it as JSON
pub async fn graph_command(
    config: &Config,
    days: Option<u32>,
    component: Option<String>,
) -> Result<()> {
    let store = TicketStore::with_path(&config.database_path())?;

    let request = GraphRequest {
        days: days.unwrap_or(config.graph.default_days),
        component: component.unwrap_or_default(),
    };

    let data = build_graph(&store, &request)?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
