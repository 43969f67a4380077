//! Table names.

/// The independent tables Guildkeep persists.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum TableName {
    /// Warning records per member
    Warnings,
    /// XP and level per member
    Levels,
    /// Coin balance per member
    Money,
    /// Per-guild settings
    Config,
}

impl TableName {
    /// File name of this table inside a data directory.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_ref())
    }
}
