//! Feed loaders for the aggregator's JSON payloads.
//!
//! Each loader pairs a raw serde struct (absent-tolerant, camelCase wire
//! names) with a validating conversion into core types.

pub mod badges;
pub mod leaderboard;
pub mod lessons;
pub mod stats;

pub use badges::{BadgesLoader, RawBadge};
pub use leaderboard::{LeaderboardLoader, RawLeaderboardEntry};
pub use lessons::{LessonsLoader, RawLesson};
pub use stats::{RawUserStats, StatsLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
