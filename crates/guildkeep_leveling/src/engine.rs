//! XP accumulation, level overrides, and rankings.

use guildkeep_core::{CooldownLedger, GuildId, LevelRecord, MemberId, MemberMap};
use guildkeep_error::{GuildkeepError, GuildkeepResult, ValidationError};
use guildkeep_storage::{SharedTable, TableName, TableStore};
use parking_lot::Mutex;
use rand::Rng;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// XP awarded for one message outside the cooldown window.
pub const PASSIVE_XP: RangeInclusive<u64> = 10..=20;

/// Largest single admin XP grant.
pub const MAX_XP_GRANT: u64 = 1_000_000;

/// Result of adding XP to a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// XP that was added
    pub awarded: u64,
    /// Levels crossed by this award
    pub levels_gained: u64,
    /// Record after normalization
    pub record: LevelRecord,
}

impl LevelUp {
    /// Whether at least one level was gained.
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Per-guild XP and levels.
///
/// The passive XP cooldown is kept in memory only and starts empty on every
/// process start.
#[derive(Debug)]
pub struct LevelingEngine {
    table: SharedTable<MemberMap<LevelRecord>>,
    cooldowns: Mutex<CooldownLedger<(GuildId, MemberId)>>,
}

impl LevelingEngine {
    /// Load the `levels` table.
    pub async fn open(store: Arc<dyn TableStore>) -> GuildkeepResult<Self> {
        let table = SharedTable::open(store, TableName::Levels).await?;
        Ok(Self::new(table))
    }

    /// Wrap an already opened table.
    pub fn new(table: SharedTable<MemberMap<LevelRecord>>) -> Self {
        Self {
            table,
            cooldowns: Mutex::new(CooldownLedger::new()),
        }
    }

    /// Add `amount` XP to `member` and roll surplus over into levels.
    #[instrument(skip(self))]
    pub async fn add_xp(
        &self,
        guild: GuildId,
        member: MemberId,
        amount: u64,
    ) -> GuildkeepResult<LevelUp> {
        let (levels_gained, record) = self
            .table
            .mutate(|table| {
                let record = table.guild_mut(guild).entry(member).or_default();
                record.xp = record.xp.saturating_add(amount);
                let gained = record.normalize();
                Ok::<_, GuildkeepError>((gained, *record))
            })
            .await?;

        if levels_gained > 0 {
            info!(%guild, level = record.level, levels_gained, "Member leveled up");
        } else {
            debug!(%guild, xp = record.xp, "XP added");
        }
        Ok(LevelUp {
            awarded: amount,
            levels_gained,
            record,
        })
    }

    /// Admin grant of `amount` XP.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `amount` is zero or above [`MAX_XP_GRANT`].
    pub async fn grant_xp(
        &self,
        guild: GuildId,
        member: MemberId,
        amount: u64,
    ) -> GuildkeepResult<LevelUp> {
        if !(1..=MAX_XP_GRANT).contains(&amount) {
            return Err(ValidationError::new(
                "amount",
                format!("must be between 1 and {}, got {}", MAX_XP_GRANT, amount),
            )
            .into());
        }
        self.add_xp(guild, member, amount).await
    }

    /// Award passive XP for a message unless `member` is on cooldown.
    ///
    /// Returns `None` without touching storage while the cooldown is active.
    pub async fn award_message_xp(
        &self,
        guild: GuildId,
        member: MemberId,
        cooldown: Duration,
        now: Instant,
    ) -> GuildkeepResult<Option<LevelUp>> {
        let acquired = self
            .cooldowns
            .lock()
            .try_acquire((guild, member), now, cooldown);
        if let Err(wait) = acquired {
            debug!(%guild, %member, wait_ms = wait.as_millis() as u64, "XP on cooldown");
            return Ok(None);
        }

        let amount = rand::thread_rng().gen_range(PASSIVE_XP);
        self.add_xp(guild, member, amount).await.map(Some)
    }

    /// Admin override: put `member` at `level` with zero XP.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `level` is below 1.
    #[instrument(skip(self))]
    pub async fn set_level(
        &self,
        guild: GuildId,
        member: MemberId,
        level: u64,
    ) -> GuildkeepResult<LevelRecord> {
        if level < 1 {
            return Err(ValidationError::new("level", "must be at least 1").into());
        }
        let record = LevelRecord { xp: 0, level };
        self.table
            .mutate(|table| {
                table.guild_mut(guild).insert(member, record);
                Ok::<_, GuildkeepError>(())
            })
            .await?;

        info!(%guild, level, "Level set");
        Ok(record)
    }

    /// `member`'s record, created and persisted on first query.
    #[instrument(skip(self))]
    pub async fn stats(&self, guild: GuildId, member: MemberId) -> GuildkeepResult<LevelRecord> {
        let existing = self
            .table
            .read(|table| table.guild(guild).and_then(|m| m.get(&member)).copied())
            .await;
        if let Some(record) = existing {
            return Ok(record);
        }

        self.table
            .mutate(|table| {
                let record = *table.guild_mut(guild).entry(member).or_default();
                Ok::<_, GuildkeepError>(record)
            })
            .await
    }

    /// Top `limit` members by level, then XP; ties go to the lower member id.
    pub async fn leaderboard(&self, guild: GuildId, limit: usize) -> Vec<(MemberId, LevelRecord)> {
        let mut ranked: Vec<(MemberId, LevelRecord)> = self
            .table
            .read(|table| {
                table
                    .guild(guild)
                    .map(|members| members.iter().map(|(m, r)| (*m, *r)).collect())
                    .unwrap_or_default()
            })
            .await;

        ranked.sort_by(|(a_id, a), (b_id, b)| {
            (b.level, b.xp)
                .cmp(&(a.level, a.xp))
                .then_with(|| a_id.cmp(b_id))
        });
        ranked.truncate(limit);
        ranked
    }

    /// 1-based leaderboard position of `member`, if they have a record.
    pub async fn rank(&self, guild: GuildId, member: MemberId) -> Option<usize> {
        self.leaderboard(guild, usize::MAX)
            .await
            .iter()
            .position(|(id, _)| *id == member)
            .map(|index| index + 1)
    }

    /// Delete every level record in `guild` and return how many there were.
    #[instrument(skip(self))]
    pub async fn reset_guild(&self, guild: GuildId) -> GuildkeepResult<usize> {
        let removed = self
            .table
            .mutate(|table| {
                let removed = table.remove_guild(guild).map_or(0, |members| members.len());
                Ok::<_, GuildkeepError>(removed)
            })
            .await?;

        info!(%guild, removed, "Levels reset");
        Ok(removed)
    }
}
