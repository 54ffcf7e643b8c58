//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;

/// Default configuration content for ticketgraph init
pub const DEFAULT_CONFIG: &str = r#"# TicketGraph Configuration
# =========================
#
# Daily opened/closed/reopened/open ticket series for the chart frontend.
# All series are recomputed from the event store on every request.

[graph]
# Trailing window length (days) when a request omits `days`
default_days = 90

# Local HTTP server for the chart frontend
[server]
http_port = 9910
# Optional: shared secret for graph requests (sent as `X-TicketGraph-Token`)
# Leave empty to disable auth (recommended for local development)
http_token = ""

[database]
# Path to the SQLite event store; empty means ~/.ticketgraph/tickets.db
path = ""
"#;

/// Write a default .ticketgraph/config.toml into the working directory
pub async fn init_command(dir: &Path, force: bool) -> Result<()> {
    let config_dir = dir.join(".ticketgraph");
    let config_path = config_dir.join("config.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create config dir: {}", config_dir.display()))?;
    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    println!("Created {}", config_path.display());
    Ok(())
}
