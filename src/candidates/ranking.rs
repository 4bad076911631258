use super::initializer::{color_batched_sequence, random_feasible_sequence, random_sequence};
use crate::config::SampleParams;
use crate::error::{CarSeqError, CsResult};
use crate::instance::Instance;
use crate::objective::{self, ObjectiveOrder, ObjectiveVector};
use crate::sequence::SequenceState;
use crate::validator::Feasibility;
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    pub sequence: Vec<usize>,
    pub objective: ObjectiveVector,
    pub feasibility: Feasibility,
}

/// Scores every candidate in parallel and sorts them best first: feasible
/// before infeasible, then by the instance's objective order. The sort is
/// stable, so equal candidates keep their input order.
pub fn rank_candidates(
    instance: &Arc<Instance>,
    candidates: Vec<Vec<usize>>,
) -> CsResult<Vec<RankedCandidate>> {
    let order = instance.objective_order();
    debug!("Ranking {} candidates", candidates.len());

    let mut ranked = candidates
        .into_par_iter()
        .map(|sequence| -> CsResult<RankedCandidate> {
            let state = SequenceState::new(instance.clone(), sequence)?;
            Ok(RankedCandidate {
                objective: state.objective(),
                feasibility: state.validate(),
                sequence: state.into_sequence(),
            })
        })
        .collect::<CsResult<Vec<_>>>()?;

    ranked.sort_by(|a, b| rank_order(order, a, b));

    match ranked.first() {
        Some(best) => info!(
            "Best of {}: {:?} ({})",
            ranked.len(),
            best.objective,
            best.feasibility
        ),
        None => warn!("No candidates to rank"),
    }
    Ok(ranked)
}

/// Draws `params.samples` random feasible sequences (one seeded RNG per
/// sample), adds the plan order and the color-batched start, and ranks them.
pub fn sample_and_rank(
    instance: &Arc<Instance>,
    params: &SampleParams,
) -> CsResult<Vec<RankedCandidate>> {
    let draw = || -> Vec<Vec<usize>> {
        (0..params.samples)
            .into_par_iter()
            .map(|i| {
                let mut rng = match params.seed {
                    Some(s) => fastrand::Rng::with_seed(s.wrapping_add(i as u64)),
                    None => fastrand::Rng::new(),
                };
                random_feasible_sequence(&mut rng, instance, params.max_attempts)
                    .unwrap_or_else(|| random_sequence(&mut rng, instance))
            })
            .collect()
    };

    let mut candidates = match params.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| CarSeqError::Config(e.to_string()))?
            .install(draw),
        None => draw(),
    };
    info!(
        "Drew {} random sequences with up to {} attempts each",
        candidates.len(),
        params.max_attempts
    );

    candidates.push(instance.identity_sequence());
    candidates.push(color_batched_sequence(instance));

    let ranked = rank_candidates(instance, candidates)?;
    let feasible = ranked
        .iter()
        .filter(|c| c.feasibility.is_feasible())
        .count();
    if feasible == 0 {
        warn!("No feasible candidate found");
    }
    Ok(ranked)
}

/// Position of `a` relative to `b` in a ranking: feasibility first, then `order`.
pub fn rank_order(order: ObjectiveOrder, a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    b.feasibility
        .is_feasible()
        .cmp(&a.feasibility.is_feasible())
        .then_with(|| objective::compare(&a.objective, &b.objective, order))
}
