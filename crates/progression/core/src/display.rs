//! Presentation tokens derived from engine values.
//!
//! These helpers only classify; rendering stays with the caller.

use crate::state::LeaderboardEntry;

/// Palette tokens used by the dashboard's difficulty badges.
///
/// Tokens name entries in the design-system palette; [`ColorToken::css_var`]
/// renders the CSS custom property reference.
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
#[strum(ascii_case_insensitive)]
pub enum ColorToken {
    #[strum(serialize = "success-500")]
    Success500,
    #[strum(serialize = "warning-400")]
    Warning400,
    #[strum(serialize = "warning-500")]
    Warning500,
    #[strum(serialize = "error-400")]
    Error400,
    #[strum(serialize = "error-500")]
    Error500,
}

impl ColorToken {
    /// CSS custom property reference for this token.
    pub fn css_var(&self) -> &'static str {
        match self {
            Self::Success500 => "var(--success-500)",
            Self::Warning400 => "var(--warning-400)",
            Self::Warning500 => "var(--warning-500)",
            Self::Error400 => "var(--error-400)",
            Self::Error500 => "var(--error-500)",
        }
    }
}

/// Errors surfaced while classifying display values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayError {
    #[error("difficulty out of range: {0} (expected 1..=5)")]
    DifficultyOutOfRange(u8),
}

/// Map a lesson difficulty (1..=5) to its palette token.
///
/// Out-of-range difficulties are a caller error; untrusted sources must
/// clamp before calling (the content loaders do).
pub fn difficulty_color(difficulty: u8) -> Result<ColorToken, DisplayError> {
    match difficulty {
        1 => Ok(ColorToken::Success500),
        2 => Ok(ColorToken::Warning400),
        3 => Ok(ColorToken::Warning500),
        4 => Ok(ColorToken::Error400),
        5 => Ok(ColorToken::Error500),
        other => Err(DisplayError::DifficultyOutOfRange(other)),
    }
}

/// Presentation label for a leaderboard position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankLabel {
    Gold,
    Silver,
    Bronze,
    /// One-based position for everyone off the podium.
    Numbered(u32),
}

impl core::fmt::Display for RankLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Gold => f.write_str("gold"),
            Self::Silver => f.write_str("silver"),
            Self::Bronze => f.write_str("bronze"),
            Self::Numbered(position) => write!(f, "#{position}"),
        }
    }
}

/// Label for a zero-based leaderboard index.
///
/// Purely positional: ties were already broken by whatever sorted the feed,
/// and XP values are never inspected here.
pub fn rank_label(index: usize) -> RankLabel {
    match index {
        0 => RankLabel::Gold,
        1 => RankLabel::Silver,
        2 => RankLabel::Bronze,
        n => RankLabel::Numbered(n as u32 + 1),
    }
}

/// Pair each leaderboard entry with its rank label, preserving feed order.
pub fn ranked(
    entries: &[LeaderboardEntry],
) -> impl Iterator<Item = (RankLabel, &LeaderboardEntry)> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| (rank_label(index), entry))
}
