//! Startup health check.

use guildkeep::{FileSystemTableStore, GuildkeepResult, GuildkeepSettings, TableName};
use guildkeep_storage::Table;
use strum::IntoEnumIterator;
use tracing::{info, instrument};

/// Require the credential, then open every table and report its size.
#[instrument(skip_all)]
pub async fn run_check(settings: &GuildkeepSettings) -> GuildkeepResult<()> {
    settings.token()?;
    info!(variable = %settings.token_env(), "Platform credential present");

    let store = FileSystemTableStore::new(settings.data_dir())?;
    for name in TableName::iter() {
        let table: Table<serde_json::Value> = Table::load(&store, name).await?;
        info!(
            table = %name,
            path = %store.table_path(name).display(),
            guilds = table.len(),
            "Table readable"
        );
    }

    println!(
        "ok: {} tables under {}",
        TableName::iter().count(),
        store.base_path().display()
    );
    Ok(())
}
