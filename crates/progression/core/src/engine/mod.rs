//! Stats transitions - the only place engine outputs feed back into a
//! snapshot.
//!
//! Transitions run through a three-phase pipeline (`pre_validate` / `apply` /
//! `post_validate`) so every mutation carries explicit pre- and
//! postconditions. The pipeline never touches the caller's snapshot; it
//! mutates a copy and returns it.

pub mod completion;
pub mod errors;
pub mod transition;

pub use completion::{AwardBadges, CompleteLesson, LevelUpResult, apply_lesson_completion};
pub use errors::{CompletionError, TransitionError, TransitionPhase};
pub use transition::{StatsTransition, drive};
