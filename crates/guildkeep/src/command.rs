//! Typed commands and their results.

use guildkeep_config::{ConfigUpdate, GuildConfig};
use guildkeep_core::{ActorSnapshot, GuildId, LevelRecord, MemberId};
use guildkeep_economy::{Reward, RewardKind, TransferReceipt};
use guildkeep_leveling::LevelUp;
use guildkeep_moderation::{TaskKey, WarnOutcome};
use std::time::Duration;

/// Who may run a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum CommandTier {
    /// Any member
    Everyone,
    /// Owner, admin-role, or moderator-role holders
    Moderator,
    /// Owner or admin-role holders
    Admin,
}

/// Guild and acting member of one inbound command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// Guild the command was issued in
    pub guild: GuildId,
    /// Member issuing the command
    pub actor: ActorSnapshot,
}

impl CommandContext {
    /// Context for `actor` in `guild`.
    pub fn new(guild: GuildId, actor: ActorSnapshot) -> Self {
        Self { guild, actor }
    }
}

/// A command with its arguments already parsed by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    /// Warn a member
    Warn {
        /// Member being warned
        target: ActorSnapshot,
        /// Free-form reason; blank uses the default
        reason: String,
    },
    /// Remove a member's latest warning
    RemoveWarning {
        /// Member losing a warning
        member: MemberId,
    },
    /// Delete a member's warning record
    ClearWarnings {
        /// Member being cleared
        member: MemberId,
    },
    /// Show a member's warnings
    Warnings {
        /// Member to look up
        member: MemberId,
    },
    /// Mute a member for a number of minutes
    TempMute {
        /// Member being muted
        target: ActorSnapshot,
        /// Mute length in minutes
        minutes: u64,
    },
    /// Lift a mute early, canceling its scheduled un-mute
    Unmute {
        /// Member being unmuted
        member: MemberId,
    },
    /// Passive XP for a message
    MessageXp,
    /// Show a member's level
    Stats {
        /// Member to look up
        member: MemberId,
    },
    /// Show the top members by level
    Leaderboard {
        /// Entries to show
        limit: usize,
    },
    /// Put a member at a level with zero XP
    SetLevel {
        /// Member to change
        member: MemberId,
        /// New level
        level: u64,
    },
    /// Grant a member XP
    GrantXp {
        /// Member receiving XP
        member: MemberId,
        /// XP to add
        amount: u64,
    },
    /// Delete every level record in the guild
    ResetLevels,
    /// Show a member's balance
    Balance {
        /// Member to look up
        member: MemberId,
    },
    /// Show the top balances
    Richest {
        /// Entries to show
        limit: usize,
    },
    /// Claim a scheduled reward
    Claim(RewardKind),
    /// Send coins to another member
    Transfer {
        /// Member receiving the coins
        recipient: ActorSnapshot,
        /// Coins to send
        amount: i64,
    },
    /// Add coins to a member
    AddMoney {
        /// Member receiving the coins
        member: MemberId,
        /// Coins to add
        amount: i64,
    },
    /// Take coins from a member, stopping at zero
    RemoveMoney {
        /// Member losing the coins
        member: MemberId,
        /// Coins to take
        amount: i64,
    },
    /// Set a reminder for the acting member
    Remind {
        /// Delay in minutes
        minutes: u64,
        /// Reminder text
        note: String,
    },
    /// Change one configuration field
    Configure(ConfigUpdate),
    /// Revert every configuration field to its default
    ResetConfig,
    /// Show the resolved configuration
    ShowConfig,
}

impl Command {
    /// Tier required to run this command.
    pub fn tier(&self) -> CommandTier {
        match self {
            Command::Warn { .. }
            | Command::RemoveWarning { .. }
            | Command::TempMute { .. }
            | Command::Unmute { .. } => CommandTier::Moderator,
            Command::ClearWarnings { .. }
            | Command::SetLevel { .. }
            | Command::GrantXp { .. }
            | Command::ResetLevels
            | Command::AddMoney { .. }
            | Command::RemoveMoney { .. }
            | Command::Configure(_)
            | Command::ResetConfig => CommandTier::Admin,
            Command::Warnings { .. }
            | Command::MessageXp
            | Command::Stats { .. }
            | Command::Leaderboard { .. }
            | Command::Balance { .. }
            | Command::Richest { .. }
            | Command::Claim(_)
            | Command::Transfer { .. }
            | Command::Remind { .. }
            | Command::ShowConfig => CommandTier::Everyone,
        }
    }

    /// Snake-case command name for logs.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Structured result of a command, for the gateway to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Warning recorded; the gateway carries out `action`
    Warned(WarnOutcome),
    /// Latest warning removed
    WarningRemoved {
        /// Warnings left
        remaining: u32,
    },
    /// Warning record deleted
    WarningsCleared {
        /// Warnings the record held
        cleared: u32,
    },
    /// A member's warnings
    WarningLog {
        /// Active warnings
        count: u32,
        /// Most recent reason entries, oldest first
        recent: Vec<String>,
    },
    /// Mute applied; un-mute scheduled
    Muted {
        /// Member to mute
        member: MemberId,
        /// Time until the un-mute fires
        duration: Duration,
    },
    /// Mute lifted
    Unmuted {
        /// Member to unmute
        member: MemberId,
        /// Whether a scheduled un-mute was canceled
        canceled_pending: bool,
    },
    /// Passive XP result; `None` while on cooldown
    MessageXp(Option<LevelUp>),
    /// A member's level progress
    Stats {
        /// Member looked up
        member: MemberId,
        /// Their record
        record: LevelRecord,
        /// 1-based leaderboard position
        rank: Option<usize>,
        /// Rendered progress toward the next level
        progress: String,
    },
    /// Top members by level
    Leaderboard(Vec<(MemberId, LevelRecord)>),
    /// Level overridden
    LevelSet(LevelRecord),
    /// XP granted
    XpGranted(LevelUp),
    /// Level records deleted
    LevelsReset {
        /// Records removed
        removed: usize,
    },
    /// A member's balance
    Balance {
        /// Member looked up
        member: MemberId,
        /// Their coins
        coins: u64,
    },
    /// Top balances
    Richest(Vec<(MemberId, u64)>),
    /// Reward credited
    Claimed {
        /// What was paid
        reward: Reward,
        /// Balance afterwards
        balance: u64,
    },
    /// Reward still on cooldown
    OnCooldown {
        /// Reward that was requested
        kind: RewardKind,
        /// Time until it can be claimed
        remaining: Duration,
    },
    /// Coins moved
    Transferred(TransferReceipt),
    /// Reminder scheduled
    ReminderSet {
        /// Handle for canceling the reminder
        key: TaskKey,
        /// Time until it fires
        delay: Duration,
    },
    /// Configuration after a change, or as requested
    Config(GuildConfig),
    /// Configuration reverted
    ConfigReset {
        /// Whether anything had been stored
        had_stored: bool,
    },
    /// Event from an automated account; nothing was done
    Ignored,
}
