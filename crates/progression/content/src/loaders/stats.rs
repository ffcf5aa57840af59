//! User stats feed loader.

use std::path::Path;

use progression_core::{UserStats, level_for_xp};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Raw wire form of the stats feed.
///
/// Field absence is tolerated here; hard validation happens in
/// [`RawUserStats::validate`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserStats {
    #[serde(default)]
    pub total_xp: i64,
    /// Server-cached level. Treated as a hint and always re-derived from XP.
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub lessons_completed: u32,
    #[serde(default)]
    pub badges_count: u32,
}

impl RawUserStats {
    /// Validate and convert into a core snapshot.
    ///
    /// Negative XP is never valid. The cached level, present or not, is
    /// replaced with the value derived from XP.
    pub fn validate(self) -> LoadResult<UserStats> {
        if self.total_xp < 0 {
            anyhow::bail!("totalXp must be non-negative (got {})", self.total_xp);
        }
        let total_xp = self.total_xp as u64;

        Ok(UserStats {
            total_xp,
            level: level_for_xp(total_xp),
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            lessons_completed: self.lessons_completed,
            badges_count: self.badges_count,
        })
    }
}

/// Loader for the user stats feed.
pub struct StatsLoader;

impl StatsLoader {
    /// Decode and validate a stats payload.
    pub fn from_json(json: &str) -> LoadResult<UserStats> {
        let raw: RawUserStats = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Failed to parse stats JSON: {}", e))?;
        raw.validate()
    }

    /// Load a stats payload from a file.
    pub fn load(path: &Path) -> LoadResult<UserStats> {
        Self::from_json(&read_file(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_round_trips() {
        let stats = StatsLoader::from_json(
            r#"{
                "totalXp": 450,
                "level": 3,
                "currentStreak": 4,
                "longestStreak": 9,
                "lessonsCompleted": 12,
                "badgesCount": 3
            }"#,
        )
        .unwrap();

        assert_eq!(stats.total_xp, 450);
        assert_eq!(stats.level, 3);
        assert_eq!(stats.current_streak, 4);
        assert_eq!(stats.lessons_completed, 12);
    }

    #[test]
    fn absent_fields_default() {
        let stats = StatsLoader::from_json(r#"{"totalXp": 150}"#).unwrap();
        assert_eq!(stats.level, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.badges_count, 0);

        let empty = StatsLoader::from_json("{}").unwrap();
        assert_eq!(empty, UserStats::new());
    }

    #[test]
    fn stale_server_level_is_replaced() {
        let stats = StatsLoader::from_json(r#"{"totalXp": 450, "level": 1}"#).unwrap();
        assert_eq!(stats.level, 3);
        assert!(stats.is_level_consistent());
    }

    #[test]
    fn negative_xp_is_rejected() {
        let error = StatsLoader::from_json(r#"{"totalXp": -5}"#).unwrap_err();
        assert!(error.to_string().contains("non-negative"));
    }
}
