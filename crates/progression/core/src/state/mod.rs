//! Snapshot types consumed and produced by the engine.
//!
//! All of these are immutable value types: the engine never retains them and
//! never mutates a caller's copy in place.

pub mod badge;
pub mod leaderboard;
pub mod lesson;
pub mod stats;

pub use badge::{Badge, BadgeId, BadgeKind, BadgeRequirement, Rarity, newly_unlocked};
pub use leaderboard::{LeaderboardEntry, UserId};
pub use lesson::{Lesson, LessonId};
pub use stats::UserStats;
