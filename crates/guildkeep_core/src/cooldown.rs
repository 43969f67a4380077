//! In-memory cooldown windows.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Ended windows are dropped once every this many acquisitions.
pub const PRUNE_INTERVAL: usize = 256;

/// Tracks, per key, the instant before which the key stays on cooldown.
///
/// The ledger is never persisted; a restart clears every window.
///
/// # Examples
///
/// ```
/// use guildkeep_core::CooldownLedger;
/// use std::time::{Duration, Instant};
///
/// let mut ledger = CooldownLedger::new();
/// let now = Instant::now();
///
/// assert!(ledger.try_acquire("alice", now, Duration::from_secs(60)).is_ok());
/// assert!(ledger.try_acquire("alice", now, Duration::from_secs(60)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CooldownLedger<K> {
    until: HashMap<K, Instant>,
    acquisitions: usize,
}

impl<K> Default for CooldownLedger<K> {
    fn default() -> Self {
        Self {
            until: HashMap::new(),
            acquisitions: 0,
        }
    }
}

impl<K: Eq + Hash> CooldownLedger<K> {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a window of `window` for `key` if none is active.
    ///
    /// Returns the time left on the active window otherwise. Every
    /// [`PRUNE_INTERVAL`] acquisitions, windows that have ended are dropped.
    pub fn try_acquire(&mut self, key: K, now: Instant, window: Duration) -> Result<(), Duration> {
        if let Some(wait) = self.remaining(&key, now) {
            return Err(wait);
        }
        self.until.insert(key, now + window);
        self.acquisitions = self.acquisitions.wrapping_add(1);
        if self.acquisitions % PRUNE_INTERVAL == 0 {
            self.prune(now);
        }
        Ok(())
    }

    /// End the window for `key` early.
    pub fn release(&mut self, key: &K) {
        self.until.remove(key);
    }

    /// Time left on the window for `key`, if one is active at `now`.
    pub fn remaining(&self, key: &K, now: Instant) -> Option<Duration> {
        self.until
            .get(key)
            .and_then(|until| until.checked_duration_since(now))
            .filter(|left| !left.is_zero())
    }

    /// Forget windows that have ended.
    pub fn prune(&mut self, now: Instant) {
        self.until.retain(|_, until| *until > now);
    }

    /// Number of tracked keys.
    pub fn len(&self) -> usize {
        self.until.len()
    }

    /// Whether no key is tracked.
    pub fn is_empty(&self) -> bool {
        self.until.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_expires() {
        let mut ledger = CooldownLedger::new();
        let start = Instant::now();
        let window = Duration::from_secs(60);

        assert!(ledger.try_acquire(1u64, start, window).is_ok());
        assert_eq!(
            ledger.try_acquire(1u64, start + Duration::from_secs(20), window),
            Err(Duration::from_secs(40))
        );
        assert!(ledger.try_acquire(1u64, start + window, window).is_ok());
    }

    #[test]
    fn test_keys_are_independent() {
        let mut ledger = CooldownLedger::new();
        let now = Instant::now();
        let window = Duration::from_secs(60);

        assert!(ledger.try_acquire((1u64, 1u64), now, window).is_ok());
        assert!(ledger.try_acquire((2u64, 1u64), now, window).is_ok());
    }

    #[test]
    fn test_prune_drops_expired() {
        let mut ledger = CooldownLedger::new();
        let now = Instant::now();
        ledger.try_acquire("a", now, Duration::from_secs(10)).unwrap();
        ledger.try_acquire("b", now, Duration::from_secs(100)).unwrap();

        ledger.prune(now + Duration::from_secs(50));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_acquire_prunes_ended_windows() {
        let mut ledger = CooldownLedger::new();
        let start = Instant::now();
        let window = Duration::from_secs(60);

        for key in 0..PRUNE_INTERVAL as u64 - 1 {
            ledger.try_acquire(key, start, window).unwrap();
        }
        assert_eq!(ledger.len(), PRUNE_INTERVAL - 1);

        let later = start + Duration::from_secs(120);
        ledger.try_acquire(u64::MAX, later, window).unwrap();
        assert_eq!(ledger.len(), 1);
        assert!(ledger.remaining(&u64::MAX, later).is_some());
    }

    #[test]
    fn test_release_reopens_window() {
        let mut ledger = CooldownLedger::new();
        let now = Instant::now();
        let window = Duration::from_secs(60);

        ledger.try_acquire("a", now, window).unwrap();
        ledger.release(&"a");
        assert!(ledger.try_acquire("a", now, window).is_ok());
    }
}
