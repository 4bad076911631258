use crate::config::EvalParams;
use crate::error::CsResult;
use crate::instance::{loader, Instance};
use crate::objective::types::SCALAR_BASE;
use crate::objective::{ObjectiveOrder, ObjectiveVector};
use crate::sequence::SequenceState;
use crate::validator::Feasibility;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// Everything a reporter needs about one evaluated sequence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub objective: ObjectiveVector,
    pub objective_order: ObjectiveOrder,
    /// Single-number view of the objective (components weighted by powers of 10 000).
    pub scalar: u128,
    pub feasibility: Feasibility,
    pub sequence: Vec<usize>,
    pub class_sequence: Vec<usize>,
}

impl EvaluationReport {
    pub fn from_state(state: &SequenceState) -> Self {
        let order = state.instance().objective_order();
        let objective = state.objective();
        Self {
            objective,
            objective_order: order,
            scalar: objective.scalarize(order, SCALAR_BASE),
            feasibility: state.validate(),
            sequence: state.sequence().to_vec(),
            class_sequence: state.class_sequence(),
        }
    }
}

/// Service: load an instance file and apply the evaluation overrides.
pub fn load_instance<P: AsRef<Path>>(path: P, params: &EvalParams) -> CsResult<Arc<Instance>> {
    let file = File::open(path)?;
    let parts = loader::load_instance(BufReader::new(file))?
        .with_overrides(params.objective_order, params.paint_batch);
    Ok(Arc::new(Instance::new(parts)?))
}

/// Service: read a solution file of original-plan indices.
pub fn load_sequence<P: AsRef<Path>>(path: P) -> CsResult<Vec<usize>> {
    let file = File::open(path)?;
    loader::load_solution(BufReader::new(file))
}

/// Service: evaluate `sequence`, or the plan order when none is given.
pub fn evaluate_sequence(
    instance: &Arc<Instance>,
    sequence: Option<Vec<usize>>,
) -> CsResult<EvaluationReport> {
    let state = match sequence {
        Some(sequence) => SequenceState::new(instance.clone(), sequence)?,
        None => SequenceState::identity(instance.clone()),
    };
    Ok(EvaluationReport::from_state(&state))
}
