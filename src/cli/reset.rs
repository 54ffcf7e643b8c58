//! Reset command implementation

use anyhow::{bail, Result};

use ticketgraph::config::Config;
use ticketgraph::store::TicketStore;

/// Delete all event data from the store
pub async fn reset_command(config: &Config, force: bool) -> Result<()> {
    let db_path = config.database_path();

    if !force {
        bail!(
            "This deletes all ticket events in {} (use --force to confirm)",
            db_path.display()
        );
    }

    let store = TicketStore::with_path(&db_path)?;
    store.reset_all()?;

    println!("Deleted all ticket events from {}.", db_path.display());
    Ok(())
}
