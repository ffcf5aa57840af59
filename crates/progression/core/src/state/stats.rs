//! User progression counters - the engine's primary input snapshot.

use crate::level::level_for_xp;

/// Immutable snapshot of a user's progression counters.
///
/// `level` is derived data: the source of truth is `total_xp`, and a value
/// arriving from a remote service is a cache to validate, never an
/// authority. Use [`UserStats::reconciled`] before trusting it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserStats {
    pub total_xp: u64,
    pub level: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub lessons_completed: u32,
    pub badges_count: u32,
}

impl UserStats {
    /// Fresh account: zero XP at level 1, all counters zero.
    pub fn new() -> Self {
        Self {
            total_xp: 0,
            level: 1,
            current_streak: 0,
            longest_streak: 0,
            lessons_completed: 0,
            badges_count: 0,
        }
    }

    /// True when the cached level matches the level derived from XP.
    pub fn is_level_consistent(&self) -> bool {
        self.level == level_for_xp(self.total_xp)
    }

    /// Copy of this snapshot with `level` re-derived from `total_xp`.
    pub fn reconciled(&self) -> Self {
        Self {
            level: level_for_xp(self.total_xp),
            ..self.clone()
        }
    }
}

impl Default for UserStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_snapshot_is_consistent() {
        let stats = UserStats::new();
        assert_eq!(stats.level, 1);
        assert!(stats.is_level_consistent());
    }

    #[test]
    fn stale_cached_level_is_reconciled() {
        let stale = UserStats {
            total_xp: 450,
            level: 1,
            ..UserStats::new()
        };
        assert!(!stale.is_level_consistent());

        let fixed = stale.reconciled();
        assert_eq!(fixed.level, 3);
        assert!(fixed.is_level_consistent());
        // Counters pass through untouched.
        assert_eq!(fixed.total_xp, 450);
        assert_eq!(fixed.lessons_completed, stale.lessons_completed);
    }
}
