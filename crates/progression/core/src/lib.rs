//! Deterministic progression logic shared across presentation surfaces.
//!
//! `progression-core` defines the canonical leveling rules (XP curve, lesson
//! completion transitions, display classification) and exposes pure APIs that
//! can be reused by dashboards and offline tools. Every function is a
//! stateless computation over the snapshot it is given; mutation and
//! re-computation scheduling belong to the callers.
pub mod config;
pub mod display;
pub mod engine;
pub mod level;
pub mod state;

pub use config::ProgressionConfig;
pub use display::{ColorToken, DisplayError, RankLabel, difficulty_color, rank_label, ranked};
pub use engine::{
    AwardBadges, CompleteLesson, CompletionError, LevelUpResult, StatsTransition, TransitionError,
    TransitionPhase, apply_lesson_completion,
};
pub use level::{level_for_xp, level_progress, xp_threshold, xp_to_next_level};
pub use state::{
    Badge, BadgeId, BadgeKind, BadgeRequirement, LeaderboardEntry, Lesson, LessonId, Rarity,
    UserId, UserStats, newly_unlocked,
};
