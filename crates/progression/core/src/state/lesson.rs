//! Lesson catalog entries.

/// Identifier for a lesson in the external catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LessonId(pub u64);

impl core::fmt::Display for LessonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "lesson:{}", self.0)
    }
}

/// A lesson as served by the catalog. Immutable once fetched.
///
/// Invariants upheld by the boundary loader:
/// - `difficulty` is within 1..=5 (untrusted values are clamped there)
/// - `xp_reward` and `estimated_time_minutes` are positive
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub difficulty: u8,
    pub xp_reward: u64,
    pub estimated_time_minutes: u32,
    pub category: String,
}
