//! Command routing: tier check, then the owning engine.

use crate::{Command, CommandContext, CommandTier, Guildkeep, Outcome};
use guildkeep_core::{GuildId, MemberId};
use guildkeep_economy::RewardKind;
use guildkeep_error::{ErrorCategory, GuildkeepResult, ValidationError};
use guildkeep_leveling::{PROGRESS_BAR_LENGTH, progress_bar};
use guildkeep_security::{Authorizer, check_hierarchy};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Largest leaderboard or rich list returned.
pub const MAX_LISTING: usize = 25;

/// Reason entries shown with a member's warnings.
pub const RECENT_WARNINGS: usize = 5;

fn minutes(field: &str, minutes: u64) -> Result<Duration, ValidationError> {
    if minutes == 0 {
        return Err(ValidationError::new(field, "must be at least one minute"));
    }
    minutes
        .checked_mul(60)
        .map(Duration::from_secs)
        .ok_or_else(|| ValidationError::new(field, format!("{} minutes is too long", minutes)))
}

fn listing(limit: usize) -> usize {
    limit.clamp(1, MAX_LISTING)
}

impl Guildkeep {
    /// Run `command` on behalf of `ctx.actor`.
    ///
    /// Privileged commands are checked against the guild's resolved
    /// configuration before any engine is touched.
    ///
    /// # Errors
    ///
    /// Any engine error, or `PermissionDenied`/`RoleNotConfigured` when the
    /// actor may not run the command.
    #[instrument(skip_all, fields(guild = %ctx.guild, actor = %ctx.actor.member(), command = command.name()))]
    pub async fn dispatch(&self, ctx: &CommandContext, command: Command) -> GuildkeepResult<Outcome> {
        let config = self.config().resolve(ctx.guild).await;
        let authorizer = Authorizer::new(&config);
        match command.tier() {
            CommandTier::Everyone => {}
            CommandTier::Moderator => authorizer.require_moderator(&ctx.actor)?,
            CommandTier::Admin => authorizer.require_admin(&ctx.actor)?,
        }
        debug!("Authorized");

        let guild = ctx.guild;
        let outcome = match command {
            Command::Warn { target, reason } => Outcome::Warned(
                self.warnings()
                    .warn(guild, &ctx.actor, &target, &reason)
                    .await?,
            ),
            Command::RemoveWarning { member } => Outcome::WarningRemoved {
                remaining: self.warnings().remove_warning(guild, member).await?,
            },
            Command::ClearWarnings { member } => Outcome::WarningsCleared {
                cleared: self.warnings().clear_warnings(guild, member).await?.count,
            },
            Command::Warnings { member } => {
                let record = self.warnings().warnings(guild, member).await;
                Outcome::WarningLog {
                    count: record.count,
                    recent: record.recent(RECENT_WARNINGS).to_vec(),
                }
            }
            Command::TempMute { target, minutes: length } => {
                check_hierarchy(&ctx.actor, &target)?;
                let duration = minutes("minutes", length)?;
                let member = target.member();
                self.tasks().schedule_unmute(guild, member, duration)?;
                Outcome::Muted { member, duration }
            }
            Command::Unmute { member } => Outcome::Unmuted {
                member,
                canceled_pending: self.tasks().cancel_unmute(guild, member),
            },
            Command::MessageXp => {
                if ctx.actor.is_bot() {
                    return Ok(Outcome::Ignored);
                }
                Outcome::MessageXp(
                    self.levels()
                        .award_message_xp(
                            guild,
                            ctx.actor.member(),
                            *config.xp_cooldown(),
                            Instant::now(),
                        )
                        .await?,
                )
            }
            Command::Stats { member } => self.stats(guild, member).await?,
            Command::Leaderboard { limit } => {
                Outcome::Leaderboard(self.levels().leaderboard(guild, listing(limit)).await)
            }
            Command::SetLevel { member, level } => {
                Outcome::LevelSet(self.levels().set_level(guild, member, level).await?)
            }
            Command::GrantXp { member, amount } => {
                Outcome::XpGranted(self.levels().grant_xp(guild, member, amount).await?)
            }
            Command::ResetLevels => Outcome::LevelsReset {
                removed: self.levels().reset_guild(guild).await?,
            },
            Command::Balance { member } => Outcome::Balance {
                member,
                coins: self.ledger().balance(guild, member).await,
            },
            Command::Richest { limit } => {
                Outcome::Richest(self.ledger().richest(guild, listing(limit)).await)
            }
            Command::Claim(kind) => self.claim(ctx, kind).await?,
            Command::Transfer { recipient, amount } => Outcome::Transferred(
                self.ledger()
                    .transfer(guild, ctx.actor.member(), &recipient, amount)
                    .await?,
            ),
            Command::AddMoney { member, amount } => Outcome::Balance {
                member,
                coins: self.ledger().credit(guild, member, amount).await?,
            },
            Command::RemoveMoney { member, amount } => Outcome::Balance {
                member,
                coins: self.ledger().remove_money(guild, member, amount).await?,
            },
            Command::Remind { minutes: delay, note } => {
                let delay = minutes("minutes", delay)?;
                let key = self
                    .tasks()
                    .schedule_reminder(guild, ctx.actor.member(), note, delay)?;
                Outcome::ReminderSet { key, delay }
            }
            Command::Configure(update) => {
                Outcome::Config(self.config().update(guild, update).await?)
            }
            Command::ResetConfig => Outcome::ConfigReset {
                had_stored: self.config().reset(guild).await?,
            },
            Command::ShowConfig => Outcome::Config(config),
        };
        Ok(outcome)
    }

    async fn stats(&self, guild: GuildId, member: MemberId) -> GuildkeepResult<Outcome> {
        let record = self.levels().stats(guild, member).await?;
        let rank = self.levels().rank(guild, member).await;
        Ok(Outcome::Stats {
            member,
            record,
            rank,
            progress: progress_bar(record.xp, record.threshold(), PROGRESS_BAR_LENGTH),
        })
    }

    async fn claim(&self, ctx: &CommandContext, kind: RewardKind) -> GuildkeepResult<Outcome> {
        let member = ctx.actor.member();
        let acquired =
            self.rewards
                .lock()
                .try_acquire((ctx.guild, member, kind), Instant::now(), kind.cooldown());
        if let Err(remaining) = acquired {
            debug!(%kind, ?remaining, "Reward on cooldown");
            return Ok(Outcome::OnCooldown { kind, remaining });
        }

        let reward = kind.roll();
        match self.ledger().claim(ctx.guild, member, reward).await {
            Ok(balance) => Ok(Outcome::Claimed { reward, balance }),
            // A failed save keeps the credit, so only a rejected credit reopens the window
            Err(err) if err.category() != ErrorCategory::IoFailure => {
                self.rewards.lock().release(&(ctx.guild, member, kind));
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}
