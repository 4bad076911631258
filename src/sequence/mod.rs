//! Mutable sequence state with the cached window counts that make
//! single-move evaluation and application cheap.

pub mod apply;
pub mod moves;
pub mod touched;
pub mod window;

pub use self::moves::Move;
pub use self::window::WindowCache;

use crate::error::SequenceError;
use crate::evaluator;
use crate::instance::Instance;
use crate::objective::{ObjectiveDelta, ObjectiveVector};
use crate::validator::{self, Feasibility};
use std::sync::Arc;

/// One candidate sequence being worked on.
///
/// Owned by a single worker; the instance is shared read-only. Between public
/// calls the cached window counts and objective always equal what a full
/// recomputation of the current permutation would give.
#[derive(Debug, Clone)]
pub struct SequenceState {
    instance: Arc<Instance>,
    permutation: Vec<usize>,
    cache: WindowCache,
    objective: ObjectiveVector,
}

impl SequenceState {
    /// Takes ownership of `permutation` after checking it is a permutation
    /// that keeps the fixed prefix. Paint batch feasibility is not required.
    pub fn new(instance: Arc<Instance>, permutation: Vec<usize>) -> Result<Self, SequenceError> {
        validator::check_permutation(&permutation, instance.nb_cars())?;
        validator::check_prefix(&permutation, instance.start_position())?;
        Ok(Self::build(instance, permutation))
    }

    /// State for the original plan order.
    pub fn identity(instance: Arc<Instance>) -> Self {
        let permutation = instance.identity_sequence();
        Self::build(instance, permutation)
    }

    fn build(instance: Arc<Instance>, permutation: Vec<usize>) -> Self {
        let cache = WindowCache::build(&instance, &permutation);
        let objective = objective_from_cache(&instance, &permutation, &cache);
        Self {
            instance,
            permutation,
            cache,
            objective,
        }
    }

    pub fn instance(&self) -> &Arc<Instance> {
        &self.instance
    }

    /// Original-plan index per position.
    pub fn sequence(&self) -> &[usize] {
        &self.permutation
    }

    /// Class id per position.
    pub fn class_sequence(&self) -> Vec<usize> {
        self.permutation
            .iter()
            .map(|&car| self.instance.class_of(car))
            .collect()
    }

    pub fn objective(&self) -> ObjectiveVector {
        self.objective
    }

    pub fn cache(&self) -> &WindowCache {
        &self.cache
    }

    pub fn into_sequence(self) -> Vec<usize> {
        self.permutation
    }

    /// Replaces the permutation, reusing the cache buffers.
    pub fn reset(&mut self, permutation: Vec<usize>) -> Result<(), SequenceError> {
        validator::check_permutation(&permutation, self.instance.nb_cars())?;
        validator::check_prefix(&permutation, self.instance.start_position())?;
        self.permutation = permutation;
        self.rebuild();
        Ok(())
    }

    /// Recomputes the cache and objective from the permutation.
    pub fn rebuild(&mut self) {
        self.cache.refill(&self.instance, &self.permutation);
        self.objective = objective_from_cache(&self.instance, &self.permutation, &self.cache);
    }

    /// Full pass over the current permutation, ignoring the cache.
    pub fn recompute(&self) -> ObjectiveVector {
        let perm = &self.permutation;
        evaluator::score_with(&self.instance, |k| perm[k])
    }

    /// True when the incremental bookkeeping matches a from-scratch rebuild.
    pub fn is_consistent(&self) -> bool {
        WindowCache::build(&self.instance, &self.permutation) == self.cache
            && self.recompute() == self.objective
    }

    /// Paint batch check over the whole line.
    pub fn validate(&self) -> Feasibility {
        let perm = &self.permutation;
        validator::paint_batch(&self.instance, |k| perm[k])
    }

    pub fn validate_move(&self, mv: Move) -> Result<Feasibility, SequenceError> {
        validator::validate_move(self, mv)
    }

    pub fn evaluate_delta(&self, mv: Move) -> Result<ObjectiveDelta, SequenceError> {
        evaluator::evaluate_delta(self, mv)
    }
}

fn objective_from_cache(
    instance: &Instance,
    permutation: &[usize],
    cache: &WindowCache,
) -> ObjectiveVector {
    let (high_violations, low_violations) = cache.violations(instance);
    ObjectiveVector {
        color_changes: evaluator::count_color_changes(instance, |k| permutation[k]),
        high_violations,
        low_violations,
    }
}
