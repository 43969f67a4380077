//! Scheduled reward amounts and cooldowns.

use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;

/// A reward a member may claim on a fixed cooldown.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum RewardKind {
    /// Flat 500 coins once a day
    Daily,
    /// 100-400 coins once an hour
    Work,
    /// 5-50 coins every five minutes
    Beg,
}

impl RewardKind {
    /// Coins this reward can pay out.
    pub fn range(self) -> RangeInclusive<u64> {
        match self {
            RewardKind::Daily => 500..=500,
            RewardKind::Work => 100..=400,
            RewardKind::Beg => 5..=50,
        }
    }

    /// Minimum time between two claims by the same member.
    pub fn cooldown(self) -> Duration {
        match self {
            RewardKind::Daily => Duration::from_secs(24 * 60 * 60),
            RewardKind::Work => Duration::from_secs(60 * 60),
            RewardKind::Beg => Duration::from_secs(5 * 60),
        }
    }

    /// Roll a payout with `rng`.
    pub fn roll_with(self, rng: &mut impl Rng) -> Reward {
        Reward {
            kind: self,
            amount: rng.gen_range(self.range()),
        }
    }

    /// Roll a payout with the thread-local generator.
    pub fn roll(self) -> Reward {
        self.roll_with(&mut rand::thread_rng())
    }
}

/// A rolled reward, ready to credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    /// Which reward was claimed
    pub kind: RewardKind,
    /// Coins to credit
    pub amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for kind in RewardKind::iter() {
            for _ in 0..200 {
                let reward = kind.roll_with(&mut rng);
                assert!(kind.range().contains(&reward.amount), "{:?}", reward);
            }
        }
    }

    #[test]
    fn test_daily_is_flat() {
        assert_eq!(RewardKind::Daily.roll().amount, 500);
    }

    #[test]
    fn test_names_parse() {
        assert_eq!("work".parse::<RewardKind>().unwrap(), RewardKind::Work);
        assert_eq!(RewardKind::Beg.to_string(), "beg");
    }
}
