//! Per-member records stored in the warnings and levels tables.

use crate::MemberId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inner mapping of one guild's table: member id to that table's record.
pub type MemberMap<R> = BTreeMap<MemberId, R>;

/// XP needed per level: reaching level `n + 1` from `n` costs `n * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u64 = 100;

/// Warning history for one member.
///
/// `count` is the authoritative counter; `reasons` is a display log that
/// grows at the tail and is popped from the tail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningRecord {
    /// Number of active warnings
    pub count: u32,
    /// Formatted reason entries, oldest first
    #[serde(default)]
    pub reasons: Vec<String>,
}

impl WarningRecord {
    /// Append a warning and return the new count.
    pub fn push(&mut self, entry: String) -> u32 {
        self.count = self.count.saturating_add(1);
        self.reasons.push(entry);
        self.count
    }

    /// Remove the most recent warning and return the remaining count.
    ///
    /// Returns `None` when there is nothing to remove.
    pub fn pop(&mut self) -> Option<u32> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        self.reasons.pop();
        Some(self.count)
    }

    /// The last `n` reason entries, oldest first.
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.reasons.len().saturating_sub(n);
        &self.reasons[start..]
    }
}

/// Experience and level for one member.
///
/// At rest `xp < level * XP_PER_LEVEL`; [`LevelRecord::normalize`]
/// restores that after XP is added.
///
/// # Examples
///
/// ```
/// use guildkeep_core::LevelRecord;
///
/// let mut record = LevelRecord::default();
/// record.xp += 250;
/// assert_eq!(record.normalize(), 2);
/// assert_eq!(record, LevelRecord { xp: 50, level: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    /// XP accumulated toward the next level
    pub xp: u64,
    /// Current level, starting at 1
    pub level: u64,
}

impl Default for LevelRecord {
    fn default() -> Self {
        Self { xp: 0, level: 1 }
    }
}

impl LevelRecord {
    /// XP needed to leave the current level.
    pub fn threshold(&self) -> u64 {
        self.level.max(1).saturating_mul(XP_PER_LEVEL)
    }

    /// Roll surplus XP over into levels and return how many were gained.
    pub fn normalize(&mut self) -> u64 {
        // A hand-edited table may carry level 0
        if self.level == 0 {
            self.level = 1;
        }
        let mut gained = 0;
        while self.xp >= self.threshold() {
            self.xp -= self.threshold();
            self.level += 1;
            gained += 1;
        }
        gained
    }
}
