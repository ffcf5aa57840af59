//! Lesson catalog feed loader.

use std::path::Path;

use progression_core::{Lesson, LessonId, ProgressionConfig};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Raw wire form of one lesson in the catalog feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLesson {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub difficulty: i64,
    pub xp_reward: i64,
    pub estimated_time_minutes: u32,
    #[serde(default)]
    pub category: String,
}

impl RawLesson {
    /// Validate and convert into a core lesson.
    ///
    /// The feed is untrusted: difficulty is clamped into the valid range
    /// rather than rejected, since a mislabeled lesson should still render.
    /// A non-positive reward or duration makes the lesson meaningless and is
    /// rejected outright.
    pub fn validate(self) -> LoadResult<Lesson> {
        if self.xp_reward <= 0 {
            anyhow::bail!(
                "lesson {}: xpReward must be positive (got {})",
                self.id,
                self.xp_reward
            );
        }
        if self.estimated_time_minutes == 0 {
            anyhow::bail!("lesson {}: estimatedTimeMinutes must be positive", self.id);
        }

        let difficulty = self.difficulty.clamp(
            i64::from(ProgressionConfig::MIN_DIFFICULTY),
            i64::from(ProgressionConfig::MAX_DIFFICULTY),
        ) as u8;

        Ok(Lesson {
            id: LessonId(self.id),
            title: self.title,
            difficulty,
            xp_reward: self.xp_reward as u64,
            estimated_time_minutes: self.estimated_time_minutes,
            category: self.category,
        })
    }
}

/// Loader for the recommended-lessons feed.
pub struct LessonsLoader;

impl LessonsLoader {
    /// Decode and validate a lesson list payload, preserving feed order.
    pub fn from_json(json: &str) -> LoadResult<Vec<Lesson>> {
        let raw: Vec<RawLesson> = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Failed to parse lessons JSON: {}", e))?;
        raw.into_iter().map(RawLesson::validate).collect()
    }

    /// Load a lesson list payload from a file.
    pub fn load(path: &Path) -> LoadResult<Vec<Lesson>> {
        Self::from_json(&read_file(path)?)
    }
}
