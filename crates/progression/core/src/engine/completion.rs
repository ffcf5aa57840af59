//! Lesson completion and badge award transitions.

use crate::level::level_for_xp;
use crate::state::UserStats;

use super::errors::{CompletionError, TransitionError};
use super::transition::{StatsTransition, drive};

/// Outcome of a single lesson completion.
///
/// Ephemeral: produced per completion event and handed to the presentation
/// layer, which raises `leveled_up` as a celebratory event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUpResult {
    pub previous_level: u32,
    pub new_level: u32,
    pub leveled_up: bool,
    pub xp_gained: u64,
}

/// Applies one finished lesson to a stats snapshot.
///
/// The engine keeps no completion ledger: callers must apply each completion
/// event at most once per lesson per user. Re-submitting an already-completed
/// lesson is a caller bug the engine cannot detect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompleteLesson {
    pub xp_gained: u64,
}

impl StatsTransition for CompleteLesson {
    type Error = CompletionError;
    type Result = LevelUpResult;

    fn pre_validate(&self, _stats: &UserStats) -> Result<(), Self::Error> {
        if self.xp_gained == 0 {
            return Err(CompletionError::ZeroXpGain);
        }
        Ok(())
    }

    fn apply(&self, stats: &mut UserStats) -> Result<Self::Result, Self::Error> {
        let previous_level = level_for_xp(stats.total_xp);
        stats.total_xp += self.xp_gained;
        let new_level = level_for_xp(stats.total_xp);

        stats.level = new_level;
        stats.lessons_completed += 1;
        // Streaks and badge counts pass through; their upkeep belongs to the
        // external collaborators.

        Ok(LevelUpResult {
            previous_level,
            new_level,
            leveled_up: new_level > previous_level,
            xp_gained: self.xp_gained,
        })
    }

    fn post_validate(&self, stats: &UserStats) -> Result<(), Self::Error> {
        let derived = level_for_xp(stats.total_xp);
        if stats.level != derived {
            return Err(CompletionError::LevelOutOfSync {
                cached: stats.level,
                derived,
            });
        }
        Ok(())
    }
}

/// Records freshly unlocked badges on a stats snapshot.
///
/// The unlock decision itself is [`crate::state::newly_unlocked`]; this
/// transition only bumps the counter once the caller has persisted the grant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AwardBadges {
    pub newly_unlocked: u32,
}

impl StatsTransition for AwardBadges {
    type Error = core::convert::Infallible;
    type Result = u32;

    fn apply(&self, stats: &mut UserStats) -> Result<Self::Result, Self::Error> {
        stats.badges_count += self.newly_unlocked;
        Ok(stats.badges_count)
    }
}

/// Pure convenience wrapper around [`CompleteLesson`]: applies a completion
/// and returns the new snapshot without touching the input.
pub fn apply_lesson_completion(
    stats: &UserStats,
    xp_gained: u64,
) -> Result<(UserStats, LevelUpResult), TransitionError<CompletionError>> {
    drive(&CompleteLesson { xp_gained }, stats)
}
