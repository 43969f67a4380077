//! Warning records and escalation.

use crate::{EscalationAction, EscalationLadder};
use chrono::{NaiveDate, Utc};
use guildkeep_core::{ActorSnapshot, GuildId, MemberId, MemberMap, WarningRecord};
use guildkeep_error::{GuildkeepError, GuildkeepResult, ModerationError, ModerationErrorKind};
use guildkeep_security::check_hierarchy;
use guildkeep_storage::{SharedTable, TableName, TableStore};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Reason recorded when a moderator gives none.
pub const NO_REASON: &str = "No reason given";

/// Result of issuing a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarnOutcome {
    /// Member's warning count after this warning
    pub count: u32,
    /// Action the caller must carry out
    pub action: EscalationAction,
    /// Log entry appended to the member's reasons
    pub entry: String,
}

/// Issues, removes, and clears warnings.
///
/// A member has a record exactly while their count is above zero: removing
/// the last warning deletes the record.
#[derive(Debug)]
pub struct WarningEngine {
    table: SharedTable<MemberMap<WarningRecord>>,
    ladder: EscalationLadder,
}

fn format_entry(reason: &str, actor: MemberId, date: NaiveDate) -> String {
    let reason = reason.trim();
    let reason = if reason.is_empty() { NO_REASON } else { reason };
    format!("{} - by {} - {}", reason, actor, date.format("%Y-%m-%d"))
}

fn nothing_to_remove() -> GuildkeepError {
    ModerationError::new(ModerationErrorKind::NothingToRemove).into()
}

impl WarningEngine {
    /// Load the `warnings` table with the default ladder.
    pub async fn open(store: Arc<dyn TableStore>) -> GuildkeepResult<Self> {
        let table = SharedTable::open(store, TableName::Warnings).await?;
        Ok(Self::new(table, EscalationLadder::default()))
    }

    /// Wrap an already opened table with a custom ladder.
    pub fn new(table: SharedTable<MemberMap<WarningRecord>>, ladder: EscalationLadder) -> Self {
        Self { table, ladder }
    }

    /// The ladder applied to new warnings.
    pub fn ladder(&self) -> &EscalationLadder {
        &self.ladder
    }

    /// Warn `target` on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// `HierarchyViolation` if the actor does not outrank the target.
    #[instrument(skip(self, actor, target, reason), fields(actor = %actor.member(), target = %target.member()))]
    pub async fn warn(
        &self,
        guild: GuildId,
        actor: &ActorSnapshot,
        target: &ActorSnapshot,
        reason: &str,
    ) -> GuildkeepResult<WarnOutcome> {
        check_hierarchy(actor, target)?;

        let entry = format_entry(reason, actor.member(), Utc::now().date_naive());
        let member = target.member();
        let logged = entry.clone();
        let count = self
            .table
            .mutate(|table| {
                let record = table.guild_mut(guild).entry(member).or_default();
                Ok::<_, GuildkeepError>(record.push(logged))
            })
            .await?;

        let action = self.ladder.action_for(count);
        info!(%guild, count, %action, "Warning issued");
        Ok(WarnOutcome {
            count,
            action,
            entry,
        })
    }

    /// Remove `member`'s most recent warning and return the remaining count.
    ///
    /// # Errors
    ///
    /// `NothingToRemove` if the member has no warnings.
    #[instrument(skip(self))]
    pub async fn remove_warning(&self, guild: GuildId, member: MemberId) -> GuildkeepResult<u32> {
        let remaining = self
            .table
            .mutate(|table| {
                let members = table
                    .existing_guild_mut(guild)
                    .ok_or_else(nothing_to_remove)?;
                let remaining = members
                    .get_mut(&member)
                    .and_then(WarningRecord::pop)
                    .ok_or_else(nothing_to_remove)?;
                if remaining == 0 {
                    debug!("Last warning removed, deleting record");
                    members.remove(&member);
                }
                Ok::<_, GuildkeepError>(remaining)
            })
            .await?;

        info!(%guild, remaining, "Warning removed");
        Ok(remaining)
    }

    /// Delete `member`'s record outright and return it.
    ///
    /// # Errors
    ///
    /// `NothingToClear` if the member has no record.
    #[instrument(skip(self))]
    pub async fn clear_warnings(
        &self,
        guild: GuildId,
        member: MemberId,
    ) -> GuildkeepResult<WarningRecord> {
        let cleared = self
            .table
            .mutate(|table| {
                table
                    .existing_guild_mut(guild)
                    .and_then(|members| members.remove(&member))
                    .ok_or_else(|| ModerationError::new(ModerationErrorKind::NothingToClear))
            })
            .await?;

        info!(%guild, count = cleared.count, "Warnings cleared");
        Ok(cleared)
    }

    /// `member`'s current record; an empty record if they have none.
    #[instrument(skip(self))]
    pub async fn warnings(&self, guild: GuildId, member: MemberId) -> WarningRecord {
        self.table
            .read(|table| {
                table
                    .guild(guild)
                    .and_then(|members| members.get(&member))
                    .cloned()
                    .unwrap_or_default()
            })
            .await
    }

    /// Warning counts for every member of `guild` with a record, by member id.
    pub async fn counts(&self, guild: GuildId) -> Vec<(MemberId, u32)> {
        self.table
            .read(|table| {
                table
                    .guild(guild)
                    .map(|members| members.iter().map(|(m, r)| (*m, r.count)).collect())
                    .unwrap_or_default()
            })
            .await
    }
}
