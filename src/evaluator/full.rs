use crate::error::SequenceError;
use crate::instance::Instance;
use crate::objective::ObjectiveVector;
use crate::sequence::window::slide_counts;
use crate::validator;

/// Objective of a complete sequence, computed from scratch.
///
/// Only windows overlapping the mutable suffix and color boundaries from the
/// start position on are counted. Feasibility is not checked here.
pub fn evaluate(
    instance: &Instance,
    sequence: &[usize],
) -> Result<ObjectiveVector, SequenceError> {
    validator::check_permutation(sequence, instance.nb_cars())?;
    Ok(score_with(instance, |k| sequence[k]))
}

/// Full pass over the sequence described by `at` (position to car).
pub fn score_with<F>(instance: &Instance, at: F) -> ObjectiveVector
where
    F: Fn(usize) -> usize,
{
    let mut objective = ObjectiveVector {
        color_changes: count_color_changes(instance, &at),
        ..Default::default()
    };

    for (o, option) in instance.options().iter().enumerate() {
        let mut total = 0u64;
        slide_counts(instance, o, instance.window_range(o), &at, |_, count| {
            total += option.excess(count);
        });
        if option.is_high_priority {
            objective.high_violations += total;
        } else {
            objective.low_violations += total;
        }
    }
    objective
}

pub fn count_color_changes<F>(instance: &Instance, at: F) -> u64
where
    F: Fn(usize) -> usize,
{
    (instance.color_boundary_start()..instance.nb_cars())
        .filter(|&b| instance.color(at(b - 1)) != instance.color(at(b)))
        .count() as u64
}
