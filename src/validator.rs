use crate::error::SequenceError;
use crate::instance::Instance;
use crate::sequence::moves::Move;
use crate::sequence::touched::TouchedBoundaries;
use crate::sequence::SequenceState;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfeasibleReason {
    #[strum(to_string = "paint batch overrun")]
    PaintBatchOverrun,
}

/// Outcome of a hard-constraint check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Feasibility {
    Feasible,
    /// `position` is the first car that breaks the constraint.
    Infeasible {
        reason: InfeasibleReason,
        position: usize,
    },
}

impl Feasibility {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Feasibility::Feasible)
    }
}

impl std::fmt::Display for Feasibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feasibility::Feasible => write!(f, "feasible"),
            Feasibility::Infeasible { reason, position } => {
                write!(f, "infeasible: {} at position {}", reason, position)
            }
        }
    }
}

/// `sequence` must hold every index `0..nb_cars` exactly once.
pub fn check_permutation(sequence: &[usize], nb_cars: usize) -> Result<(), SequenceError> {
    if sequence.len() != nb_cars {
        return Err(SequenceError::WrongLength {
            expected: nb_cars,
            found: sequence.len(),
        });
    }
    let mut seen = vec![false; nb_cars];
    for (position, &index) in sequence.iter().enumerate() {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(SequenceError::Malformed { position, index }),
        }
    }
    Ok(())
}

/// The first `start_position` entries must be the identity.
pub fn check_prefix(sequence: &[usize], start_position: usize) -> Result<(), SequenceError> {
    match sequence
        .iter()
        .take(start_position)
        .enumerate()
        .find(|(position, &index)| *position != index)
    {
        Some((position, _)) => Err(SequenceError::FixedPrefixViolation { position }),
        None => Ok(()),
    }
}

/// Full check of a candidate: well-formed permutation, untouched prefix and
/// no color run longer than the paint batch limit anywhere on the line.
pub fn validate_full(
    instance: &Instance,
    sequence: &[usize],
) -> Result<Feasibility, SequenceError> {
    check_permutation(sequence, instance.nb_cars())?;
    check_prefix(sequence, instance.start_position())?;
    Ok(paint_batch(instance, |k| sequence[k]))
}

/// Scans every color run of the sequence given by `at`.
pub fn paint_batch<F>(instance: &Instance, at: F) -> Feasibility
where
    F: Fn(usize) -> usize,
{
    let limit = instance.max_paint_batch();
    let mut run = 0;
    let mut previous = None;
    for position in 0..instance.nb_cars() {
        let color = instance.color(at(position));
        if previous == Some(color) {
            run += 1;
        } else {
            run = 1;
            previous = Some(color);
        }
        if run > limit {
            return Feasibility::Infeasible {
                reason: InfeasibleReason::PaintBatchOverrun,
                position,
            };
        }
    }
    Feasibility::Feasible
}

/// Would the sequence still respect the paint batch limit after `mv`?
///
/// Only runs through the boundaries the move creates are inspected, each
/// bounded by the limit in both directions, so the current sequence is taken
/// to be feasible outside them.
pub fn validate_move(state: &SequenceState, mv: Move) -> Result<Feasibility, SequenceError> {
    let instance = state.instance();
    mv.check(instance)?;
    if mv.is_noop() {
        return Ok(Feasibility::Feasible);
    }

    let perm = state.sequence();
    let at = |k: usize| mv.index_after(perm, k);
    let touched = TouchedBoundaries::of(&mv, instance.nb_cars());
    for &b in touched.after() {
        if let Some(position) = overrun_through(instance, &at, b) {
            return Ok(Feasibility::Infeasible {
                reason: InfeasibleReason::PaintBatchOverrun,
                position,
            });
        }
    }
    Ok(Feasibility::Feasible)
}

/// Position where the run containing `pos` first exceeds the limit, if it does.
fn overrun_through<F>(instance: &Instance, at: F, pos: usize) -> Option<usize>
where
    F: Fn(usize) -> usize,
{
    let limit = instance.max_paint_batch();
    let n = instance.nb_cars();
    let color = instance.color(at(pos));

    let mut left = 0;
    while left < limit && left < pos && instance.color(at(pos - left - 1)) == color {
        left += 1;
    }
    let mut right = 0;
    while left + right < limit
        && pos + right + 1 < n
        && instance.color(at(pos + right + 1)) == color
    {
        right += 1;
    }

    (left + right >= limit).then(|| pos - left + limit)
}
