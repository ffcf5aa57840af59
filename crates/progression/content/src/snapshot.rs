//! Aggregated dashboard snapshot.
//!
//! The four feeds load independently (the aggregator fetches them
//! concurrently), so any of them may still be absent when the presentation
//! layer first renders. The snapshot exposes defaulting accessors for that
//! window and typed errors for computations that cannot default.

use progression_core::{
    Badge, LeaderboardEntry, Lesson, ProgressionConfig, UserStats, level_progress,
};
use serde::Deserialize;

use crate::loaders::{LoadResult, RawBadge, RawLeaderboardEntry, RawLesson, RawUserStats};

/// Errors surfaced when a non-defaulting computation is requested from an
/// incomplete snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("user stats feed has not loaded")]
    MissingStats,
}

/// Raw wire form of a combined dashboard payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDashboard {
    #[serde(default)]
    user_stats: Option<RawUserStats>,
    #[serde(default)]
    lessons: Vec<RawLesson>,
    #[serde(default)]
    badges: Vec<RawBadge>,
    #[serde(default)]
    leaderboard: Vec<RawLeaderboardEntry>,
}

/// Complete dashboard data set assembled from the four feeds.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub stats: Option<UserStats>,
    pub lessons: Vec<Lesson>,
    pub badges: Vec<Badge>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl DashboardSnapshot {
    /// Decode and validate a combined dashboard payload.
    pub fn from_json(json: &str) -> LoadResult<Self> {
        let raw: RawDashboard = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Failed to parse dashboard JSON: {}", e))?;

        Ok(Self {
            stats: raw.user_stats.map(RawUserStats::validate).transpose()?,
            lessons: raw
                .lessons
                .into_iter()
                .map(RawLesson::validate)
                .collect::<LoadResult<_>>()?,
            badges: raw.badges.into_iter().map(RawBadge::into_badge).collect(),
            leaderboard: raw
                .leaderboard
                .into_iter()
                .map(RawLeaderboardEntry::validate)
                .collect::<LoadResult<_>>()?,
        })
    }

    /// Stats feed, or `MissingStats` while it has not loaded.
    pub fn stats(&self) -> Result<&UserStats, SnapshotError> {
        self.stats.as_ref().ok_or(SnapshotError::MissingStats)
    }

    /// Progress through the current level, defaulting to 0 before the stats
    /// feed arrives so the dashboard can render immediately.
    pub fn level_progress(&self) -> f64 {
        self.stats.as_ref().map(level_progress).unwrap_or(0.0)
    }

    /// Recommended lessons clipped to the configured dashboard limit.
    pub fn recommended_lessons(&self, config: &ProgressionConfig) -> &[Lesson] {
        clip(&self.lessons, config.lesson_limit)
    }

    /// Recent badges clipped to the configured grid size.
    pub fn recent_badges(&self, config: &ProgressionConfig) -> &[Badge] {
        clip(&self.badges, config.badge_limit)
    }

    /// Leaderboard rows clipped to the configured sidebar size.
    pub fn top_learners(&self, config: &ProgressionConfig) -> &[LeaderboardEntry] {
        clip(&self.leaderboard, config.leaderboard_limit)
    }
}

fn clip<T>(items: &[T], limit: usize) -> &[T] {
    &items[..items.len().min(limit)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use progression_core::{BadgeId, rank_label, ranked};

    const DASHBOARD: &str = r#"{
        "userStats": {"totalXp": 250, "level": 2, "lessonsCompleted": 8},
        "lessons": [
            {"id": 1, "title": "Ownership", "difficulty": 2, "xpReward": 40,
             "estimatedTimeMinutes": 10, "category": "rust"}
        ],
        "badges": [
            {"id": 9, "name": "Starter", "rarity": "uncommon"}
        ],
        "leaderboard": [
            {"id": 3, "username": "grace", "totalXp": 900},
            {"id": 7, "username": "ada", "totalXp": 400}
        ]
    }"#;

    #[test]
    fn combined_payload_assembles_all_feeds() {
        let snapshot = DashboardSnapshot::from_json(DASHBOARD).unwrap();

        let stats = snapshot.stats().unwrap();
        assert_eq!(stats.total_xp, 250);
        assert_eq!(stats.level, 2);

        assert_eq!(snapshot.lessons.len(), 1);
        assert_eq!(snapshot.badges[0].id, BadgeId(9));
        assert_eq!(snapshot.leaderboard[0].username, "grace");

        // (250 - 100) / (400 - 100) * 100
        assert_eq!(snapshot.level_progress(), 50.0);
    }

    #[test]
    fn empty_snapshot_defaults_instead_of_failing() {
        let snapshot = DashboardSnapshot::from_json("{}").unwrap();

        assert_eq!(snapshot.stats(), Err(SnapshotError::MissingStats));
        assert_eq!(snapshot.level_progress(), 0.0);
        assert!(snapshot.lessons.is_empty());
        assert!(snapshot.leaderboard.is_empty());
    }

    #[test]
    fn feeds_are_clipped_to_configured_limits() {
        let rows: Vec<String> = (0..8)
            .map(|i| format!(r#"{{"id": {i}, "username": "u{i}", "totalXp": {}}}"#, 800 - i))
            .collect();
        let json = format!(r#"{{"leaderboard": [{}]}}"#, rows.join(","));
        let snapshot = DashboardSnapshot::from_json(&json).unwrap();

        let config = ProgressionConfig::new();
        let top = snapshot.top_learners(&config);
        assert_eq!(top.len(), ProgressionConfig::DEFAULT_LEADERBOARD_LIMIT);

        // Labels follow feed positions even after clipping.
        let labels: Vec<String> = ranked(top).map(|(label, _)| label.to_string()).collect();
        assert_eq!(labels, vec!["gold", "silver", "bronze", "#4", "#5"]);
        assert_eq!(rank_label(5).to_string(), "#6");
    }
}
