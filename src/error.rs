use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarSeqError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse Error at token {token}: {message}")]
    Parse { token: usize, message: String },

    #[error("Instance Error: {0}")]
    Instance(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Sequence Error: {0}")]
    Sequence(#[from] SequenceError),
}

pub type CsResult<T> = Result<T, CarSeqError>;

/// A candidate sequence (or a move on one) that no driver should ever produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("sequence has length {found}, expected {expected}")]
    WrongLength { expected: usize, found: usize },

    #[error("sequence is not a permutation: index {index} at position {position}")]
    Malformed { position: usize, index: usize },

    #[error("fixed prefix altered at position {position}")]
    FixedPrefixViolation { position: usize },

    #[error("position {position} out of range for {len} cars")]
    PositionOutOfRange { position: usize, len: usize },
}

/// Why `SequenceState::apply` refused a move. Nothing was mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveRejected {
    #[error("paint batch overrun at position {position}")]
    PaintBatchOverrun { position: usize },

    #[error("illegal move: {0}")]
    Illegal(#[from] SequenceError),
}
