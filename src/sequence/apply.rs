use super::moves::Move;
use super::touched::TouchedWindows;
use super::window::slide_counts;
use super::SequenceState;
use crate::error::MoveRejected;
use crate::evaluator;
use crate::objective::ObjectiveDelta;
use crate::validator::{self, Feasibility};
use tracing::trace;

impl SequenceState {
    /// Commits `mv` if it keeps the paint batch limit.
    ///
    /// Either the permutation, cache and objective all reflect the move
    /// afterwards, or nothing changed and the rejection is returned.
    pub fn apply(&mut self, mv: Move) -> Result<ObjectiveDelta, MoveRejected> {
        if let Feasibility::Infeasible { position, .. } = validator::validate_move(self, mv)? {
            trace!("Rejected {:?}: paint batch overrun at {}", mv, position);
            return Err(MoveRejected::PaintBatchOverrun { position });
        }
        if mv.is_noop() {
            return Ok(ObjectiveDelta::ZERO);
        }

        let delta = evaluator::evaluate_delta(self, mv)?;
        mv.apply_to(&mut self.permutation);
        self.refresh_windows(&mv);
        self.objective += delta;
        Ok(delta)
    }

    /// Brings the cache in line with the already-moved permutation.
    fn refresh_windows(&mut self, mv: &Move) {
        for o in 0..self.instance.nb_options() {
            let size = self.instance.option(o).window_size;
            let touched = TouchedWindows::of(mv, size, self.cache.scan(o));
            if let Some(shift) = &touched.shift {
                self.cache.shift(o, shift);
            }

            let perm = &self.permutation;
            let cache = &mut self.cache;
            for windows in touched.direct {
                slide_counts(
                    &self.instance,
                    o,
                    windows,
                    |k| perm[k],
                    |w, count| cache.set(o, w, count),
                );
            }
        }
    }
}
