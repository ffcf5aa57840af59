//! Leaderboard snapshot entries.

/// Identifier for a user account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserId(pub u64);

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// One row of the already-sorted leaderboard feed.
///
/// The data source sorts descending by `total_xp` and breaks ties before the
/// engine ever sees the sequence; the engine never re-orders entries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeaderboardEntry {
    pub id: UserId,
    pub username: String,
    pub total_xp: u64,
}
