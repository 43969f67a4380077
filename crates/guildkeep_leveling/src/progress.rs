//! Text progress bars for level progress.

/// Cells in a rendered bar.
pub const PROGRESS_BAR_LENGTH: usize = 10;

/// Render `current` out of `total` as `[████░░░░░░] 40%`.
///
/// Progress is capped at 100%. A `total` of zero counts as one.
///
/// # Examples
///
/// ```
/// use guildkeep_leveling::progress_bar;
///
/// assert_eq!(progress_bar(40, 100, 10), "[████░░░░░░] 40%");
/// assert_eq!(progress_bar(5, 0, 4), "[████] 100%");
/// ```
pub fn progress_bar(current: u64, total: u64, length: usize) -> String {
    let total = total.max(1);
    let current = current.min(total);
    let filled = (length as u128 * current as u128 / total as u128) as usize;
    let percent = current as u128 * 100 / total as u128;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled),
        "░".repeat(length - filled),
        percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bar() {
        assert_eq!(progress_bar(0, 300, 10), "[░░░░░░░░░░] 0%");
    }

    #[test]
    fn test_partial_cells_round_down() {
        assert_eq!(progress_bar(199, 200, 10), "[█████████░] 99%");
    }

    #[test]
    fn test_overflowing_progress_is_capped() {
        assert_eq!(progress_bar(500, 100, 5), "[█████] 100%");
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        assert_eq!(progress_bar(u64::MAX / 2, u64::MAX, 2), "[░░] 49%");
    }
}
