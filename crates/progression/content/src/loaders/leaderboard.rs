//! Leaderboard feed loader.

use std::path::Path;

use progression_core::{LeaderboardEntry, UserId};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Raw wire form of one leaderboard row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLeaderboardEntry {
    pub id: u64,
    pub username: String,
    pub total_xp: i64,
}

impl RawLeaderboardEntry {
    /// Validate and convert into a core entry.
    pub fn validate(self) -> LoadResult<LeaderboardEntry> {
        if self.total_xp < 0 {
            anyhow::bail!(
                "leaderboard entry {}: totalXp must be non-negative (got {})",
                self.id,
                self.total_xp
            );
        }
        Ok(LeaderboardEntry {
            id: UserId(self.id),
            username: self.username,
            total_xp: self.total_xp as u64,
        })
    }
}

/// Loader for the leaderboard feed.
///
/// The feed arrives already sorted descending by XP with ties broken
/// upstream; entries are kept exactly in feed order.
pub struct LeaderboardLoader;

impl LeaderboardLoader {
    /// Decode and validate a leaderboard payload.
    pub fn from_json(json: &str) -> LoadResult<Vec<LeaderboardEntry>> {
        let raw: Vec<RawLeaderboardEntry> = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Failed to parse leaderboard JSON: {}", e))?;
        raw.into_iter().map(RawLeaderboardEntry::validate).collect()
    }

    /// Load a leaderboard payload from a file.
    pub fn load(path: &Path) -> LoadResult<Vec<LeaderboardEntry>> {
        Self::from_json(&read_file(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_order_is_preserved() {
        let entries = LeaderboardLoader::from_json(
            r#"[
                {"id": 3, "username": "grace", "totalXp": 900},
                {"id": 7, "username": "ada", "totalXp": 900},
                {"id": 1, "username": "linus", "totalXp": 200}
            ]"#,
        )
        .unwrap();

        let ids: Vec<UserId> = entries.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![UserId(3), UserId(7), UserId(1)]);
    }

    #[test]
    fn negative_xp_is_rejected() {
        let error = LeaderboardLoader::from_json(
            r#"[{"id": 1, "username": "mallory", "totalXp": -10}]"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("non-negative"));
    }
}
