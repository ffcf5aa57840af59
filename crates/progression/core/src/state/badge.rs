//! Badges and their unlock requirements.

use super::stats::UserStats;

/// Identifier for a badge definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BadgeId(pub u64);

impl core::fmt::Display for BadgeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "badge:{}", self.0)
    }
}

/// Cosmetic rarity tier of a badge.
///
/// Rarity never gates anything; absent or unrecognized wire values fall back
/// to `Common` rather than failing.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Parse a wire value, defaulting to `Common` when absent or unrecognized.
    pub fn classify(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse().ok())
            .unwrap_or_default()
    }

    /// CSS class used by the dashboard badge grid.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Common => "badge-common",
            Self::Uncommon => "badge-uncommon",
            Self::Rare => "badge-rare",
            Self::Epic => "badge-epic",
            Self::Legendary => "badge-legendary",
        }
    }
}

/// Counter a badge requirement is measured against.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BadgeKind {
    /// Total XP reaches the required value.
    XpMilestone,
    /// Completed lessons reach the required value.
    LessonCompletion,
    /// Current or longest streak reaches the required value.
    StreakAchievement,
    /// Owned badges reach the required value.
    BadgeCollector,
}

/// Unlock condition attached to a badge definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BadgeRequirement {
    pub kind: BadgeKind,
    pub required: u64,
}

impl BadgeRequirement {
    /// Whether `stats` satisfies this requirement.
    pub fn unlocked_by(&self, stats: &UserStats) -> bool {
        match self.kind {
            BadgeKind::XpMilestone => stats.total_xp >= self.required,
            BadgeKind::LessonCompletion => u64::from(stats.lessons_completed) >= self.required,
            BadgeKind::StreakAchievement => {
                u64::from(stats.current_streak.max(stats.longest_streak)) >= self.required
            }
            BadgeKind::BadgeCollector => u64::from(stats.badges_count) >= self.required,
        }
    }
}

/// A badge definition as served by the badge feed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    /// Badges without a requirement can only be granted manually and are
    /// never auto-unlocked.
    pub requirement: Option<BadgeRequirement>,
}

/// Badges in `badges` that `stats` now satisfies but are not yet in `owned`.
///
/// Input order is preserved.
pub fn newly_unlocked<'a>(
    badges: &'a [Badge],
    stats: &UserStats,
    owned: &[BadgeId],
) -> Vec<&'a Badge> {
    badges
        .iter()
        .filter(|badge| !owned.contains(&badge.id))
        .filter(|badge| {
            badge
                .requirement
                .is_some_and(|requirement| requirement.unlocked_by(stats))
        })
        .collect()
}
