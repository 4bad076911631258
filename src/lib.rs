pub mod api;
pub mod candidates;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod instance;
pub mod objective;
pub mod sequence;
pub mod validator;

pub use crate::error::{CarSeqError, CsResult, MoveRejected, SequenceError};
pub use crate::evaluator::{evaluate, evaluate_delta};
pub use crate::instance::Instance;
pub use crate::objective::{compare, ObjectiveDelta, ObjectiveOrder, ObjectiveVector};
pub use crate::sequence::{Move, SequenceState};
pub use crate::validator::{validate_full, validate_move, Feasibility, InfeasibleReason};
