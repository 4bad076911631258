//! Producing and ranking whole candidate sequences.

pub mod initializer;
pub mod ranking;

pub use self::initializer::{color_batched_sequence, random_feasible_sequence, random_sequence};
pub use self::ranking::{rank_candidates, rank_order, sample_and_rank, RankedCandidate};
