//! Engine assembly.

use guildkeep_config::ConfigResolver;
use guildkeep_core::{CooldownLedger, GuildId, MemberId};
use guildkeep_economy::{Ledger, RewardKind};
use guildkeep_error::GuildkeepResult;
use guildkeep_leveling::LevelingEngine;
use guildkeep_moderation::{DeferredTask, TaskQueue, WarningEngine};
use guildkeep_storage::{FileSystemTableStore, TableStore};
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, instrument};

/// Every engine, opened over one table store.
///
/// Commands go through [`Guildkeep::dispatch`]; the engines are also exposed
/// for callers that drive them directly.
pub struct Guildkeep {
    store: Arc<dyn TableStore>,
    config: ConfigResolver,
    warnings: WarningEngine,
    levels: LevelingEngine,
    ledger: Ledger,
    tasks: TaskQueue,
    pub(crate) rewards: Mutex<CooldownLedger<(GuildId, MemberId, RewardKind)>>,
}

impl std::fmt::Debug for Guildkeep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guildkeep")
            .field("backend", &self.store.backend())
            .field("pending_tasks", &self.tasks.pending_count())
            .finish_non_exhaustive()
    }
}

impl Guildkeep {
    /// Open the tables under `data_dir`, creating it if needed.
    ///
    /// Also returns the receiver on which expired un-mutes and reminders
    /// arrive.
    pub async fn open(
        data_dir: impl AsRef<Path>,
    ) -> GuildkeepResult<(Self, UnboundedReceiver<DeferredTask>)> {
        let store = FileSystemTableStore::new(data_dir.as_ref())?;
        Self::with_store(Arc::new(store)).await
    }

    /// Open every table from `store`.
    #[instrument(skip(store), fields(backend = store.backend()))]
    pub async fn with_store(
        store: Arc<dyn TableStore>,
    ) -> GuildkeepResult<(Self, UnboundedReceiver<DeferredTask>)> {
        let config = ConfigResolver::open(Arc::clone(&store)).await?;
        let warnings = WarningEngine::open(Arc::clone(&store)).await?;
        let levels = LevelingEngine::open(Arc::clone(&store)).await?;
        let ledger = Ledger::open(Arc::clone(&store)).await?;
        let (tasks, due) = TaskQueue::new();

        info!("Guildkeep state opened");
        let state = Self {
            store,
            config,
            warnings,
            levels,
            ledger,
            tasks,
            rewards: Mutex::new(CooldownLedger::new()),
        };
        Ok((state, due))
    }

    /// Name of the storage backend.
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Per-guild configuration.
    pub fn config(&self) -> &ConfigResolver {
        &self.config
    }

    /// Warning records.
    pub fn warnings(&self) -> &WarningEngine {
        &self.warnings
    }

    /// XP and levels.
    pub fn levels(&self) -> &LevelingEngine {
        &self.levels
    }

    /// Coin balances.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Pending un-mutes and reminders.
    pub fn tasks(&self) -> &TaskQueue {
        &self.tasks
    }
}
