//! Serve command implementation

use anyhow::Result;
use tracing::info;

use ticketgraph::config::Config;
use ticketgraph::server::start_http_server;
use ticketgraph::store::TicketStore;

/// Open the event store and serve the graph until interrupted
pub async fn serve_command(config: &Config) -> Result<()> {
    let store = TicketStore::with_path(&config.database_path())?;

    start_http_server(store, config.server.http_port, config.auth_token());

    info!(
        "Serving ticket graph on port {} (Ctrl-C to stop)",
        config.server.http_port
    );
    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    Ok(())
}
