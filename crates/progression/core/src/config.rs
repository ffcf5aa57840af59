/// Progression constants and tunable feed parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressionConfig {
    /// Number of recommended lessons surfaced on the dashboard.
    pub lesson_limit: usize,
    /// Number of recent badges shown in the badge grid.
    pub badge_limit: usize,
    /// Number of leaderboard rows shown in the sidebar.
    pub leaderboard_limit: usize,
}

impl ProgressionConfig {
    // ===== compile-time constants used by the curve and classifiers =====
    /// XP span of the first level. The curve is quadratic: being at level L
    /// requires (L-1)^2 * XP_PER_LEVEL_STEP cumulative XP.
    pub const XP_PER_LEVEL_STEP: u64 = 100;
    /// Lowest valid lesson difficulty.
    pub const MIN_DIFFICULTY: u8 = 1;
    /// Highest valid lesson difficulty.
    pub const MAX_DIFFICULTY: u8 = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LESSON_LIMIT: usize = 5;
    pub const DEFAULT_BADGE_LIMIT: usize = 6;
    pub const DEFAULT_LEADERBOARD_LIMIT: usize = 5;

    pub fn new() -> Self {
        Self {
            lesson_limit: Self::DEFAULT_LESSON_LIMIT,
            badge_limit: Self::DEFAULT_BADGE_LIMIT,
            leaderboard_limit: Self::DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self::new()
    }
}
