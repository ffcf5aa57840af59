//! Transition trait and pipeline driver.

use crate::state::UserStats;

use super::errors::{TransitionError, TransitionPhase};

/// A validated mutation of a [`UserStats`] snapshot.
///
/// Implementations may assume `apply` only runs after `pre_validate`
/// succeeded.
pub trait StatsTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the snapshot **before** mutation.
    fn pre_validate(&self, _stats: &UserStats) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the transition by mutating the snapshot directly.
    fn apply(&self, stats: &mut UserStats) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the snapshot **after** mutation.
    fn post_validate(&self, _stats: &UserStats) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Executes a transition through the three-phase pipeline.
///
/// The input snapshot is never touched; a mutated copy is returned alongside
/// the transition's result.
pub fn drive<T>(
    transition: &T,
    stats: &UserStats,
) -> Result<(UserStats, T::Result), TransitionError<T::Error>>
where
    T: StatsTransition,
{
    transition
        .pre_validate(stats)
        .map_err(|error| TransitionError::new(TransitionPhase::PreValidate, error))?;

    let mut next = stats.clone();
    let result = transition
        .apply(&mut next)
        .map_err(|error| TransitionError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(&next)
        .map_err(|error| TransitionError::new(TransitionPhase::PostValidate, error))?;

    Ok((next, result))
}
