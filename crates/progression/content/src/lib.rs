//! Boundary decoding for the progression engine.
//!
//! This crate turns the external aggregator's JSON feeds (user stats, lesson
//! catalog, badge list, leaderboard) into validated `progression-core`
//! snapshots. All tolerance for missing or untrusted fields lives here; the
//! core only ever sees well-formed values.
//!
//! Loaders accept JSON text directly (the feeds arrive over HTTP) and, for
//! fixtures and offline tools, from files.

pub mod loaders;
pub mod snapshot;

pub use loaders::{
    BadgesLoader, LeaderboardLoader, LessonsLoader, LoadResult, RawBadge, RawLeaderboardEntry,
    RawLesson, RawUserStats, StatsLoader,
};
pub use snapshot::{DashboardSnapshot, SnapshotError};
