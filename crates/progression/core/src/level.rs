//! Level/XP curve - the quadratic progression at the heart of the engine.
//!
//! Formulas:
//! - level(xp) = isqrt(xp / 100) + 1
//! - threshold(level) = (level - 1)^2 * 100
//!
//! Level 1 covers [0, 100), level 2 covers [100, 400), and every step grows
//! quadratically from there. Level math is integer-only for determinism; only
//! the progress fraction, which exists for rendering, uses floating point.

use crate::config::ProgressionConfig;
use crate::state::UserStats;

/// Compute the level reached at a cumulative XP total.
///
/// Monotone non-decreasing in `total_xp`, and always at least 1.
pub fn level_for_xp(total_xp: u64) -> u32 {
    integer_sqrt(total_xp / ProgressionConfig::XP_PER_LEVEL_STEP) as u32 + 1
}

/// Minimum cumulative XP required to be at `level`.
///
/// Precondition: `level >= 1` (level 0 does not exist).
pub fn xp_threshold(level: u32) -> u64 {
    debug_assert!(level >= 1, "levels start at 1");
    let steps = u64::from(level.saturating_sub(1));
    steps
        .saturating_mul(steps)
        .saturating_mul(ProgressionConfig::XP_PER_LEVEL_STEP)
}

/// XP still needed to reach the next level from a cumulative total.
pub fn xp_to_next_level(total_xp: u64) -> u64 {
    xp_threshold(level_for_xp(total_xp) + 1).saturating_sub(total_xp)
}

/// Progress through the current level as a percentage in [0, 100].
///
/// The level is always re-derived from XP; a cached `stats.level` is never
/// consulted here.
pub fn level_progress(stats: &UserStats) -> f64 {
    let level = level_for_xp(stats.total_xp);
    let low = xp_threshold(level);
    let high = xp_threshold(level + 1);
    let span = (high - low) as f64;
    let progress = (stats.total_xp - low) as f64 / span * 100.0;
    progress.clamp(0.0, 100.0)
}

/// Integer square root (for determinism, no floating point).
fn integer_sqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_account_is_level_one() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(xp_threshold(1), 0);
    }

    #[test]
    fn level_boundary_at_one_hundred_xp() {
        assert_eq!(level_for_xp(99), 1);
        assert_eq!(level_for_xp(100), 2);
        assert_eq!(level_for_xp(399), 2);
        assert_eq!(level_for_xp(400), 3);
    }

    #[test]
    fn thresholds_grow_quadratically() {
        assert_eq!(xp_threshold(2), 100);
        assert_eq!(xp_threshold(3), 400);
        assert_eq!(xp_threshold(4), 900);
        assert_eq!(xp_threshold(11), 10_000);
    }

    #[test]
    fn threshold_round_trip() {
        for level in 1..=200u32 {
            assert_eq!(level_for_xp(xp_threshold(level)), level);
            if level > 1 {
                assert_eq!(level_for_xp(xp_threshold(level) - 1), level - 1);
            }
        }
    }

    #[test]
    fn level_is_monotone_and_at_least_one() {
        let mut previous = 0;
        for xp in 0..=50_000u64 {
            let level = level_for_xp(xp);
            assert!(level >= 1);
            assert!(level >= previous, "level dropped at xp={xp}");
            previous = level;
        }
    }

    #[test]
    fn xp_to_next_counts_down_to_boundary() {
        assert_eq!(xp_to_next_level(0), 100);
        assert_eq!(xp_to_next_level(99), 1);
        assert_eq!(xp_to_next_level(100), 300);
        assert_eq!(xp_to_next_level(250), 150);
    }

    #[test]
    fn progress_stays_in_range() {
        for xp in (0..=50_000u64).step_by(7) {
            let stats = UserStats {
                total_xp: xp,
                ..UserStats::new()
            };
            let progress = level_progress(&stats);
            assert!((0.0..=100.0).contains(&progress), "progress {progress} at xp={xp}");
        }
    }

    #[test]
    fn progress_scenarios() {
        let at = |total_xp| UserStats {
            total_xp,
            ..UserStats::new()
        };
        assert_eq!(level_progress(&at(0)), 0.0);
        assert_eq!(level_progress(&at(50)), 50.0);
        assert_eq!(level_progress(&at(100)), 0.0);
        assert_eq!(level_progress(&at(250)), 50.0);
    }

    #[test]
    fn integer_sqrt_matches_floor_of_real_sqrt() {
        for n in 0..=100_000u64 {
            let root = integer_sqrt(n);
            assert!(root * root <= n, "isqrt({n}) = {root} too large");
            assert!((root + 1) * (root + 1) > n, "isqrt({n}) = {root} too small");
        }
    }
}
