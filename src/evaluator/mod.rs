//! Objective computation: a full pass over a sequence, and the exact change a
//! single move would cause on a [`SequenceState`](crate::sequence::SequenceState).

pub mod delta;
pub mod full;

pub use self::delta::evaluate_delta;
pub use self::full::{count_color_changes, evaluate, score_with};
