use crate::error::SequenceError;
use crate::instance::Instance;
use serde::{Deserialize, Serialize};

/// A single local change to a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Exchange the cars at two positions.
    Swap(usize, usize),
    /// Take the car at `from` out of the line and re-insert it so that it ends
    /// up at `to`. Cars in between shift by one position.
    Relocate { from: usize, to: usize },
}

impl Move {
    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        match *self {
            Move::Swap(i, j) => (i, j),
            Move::Relocate { from, to } => (from, to),
        }
    }

    /// Lowest and highest position whose car may change.
    #[inline]
    pub fn span(&self) -> (usize, usize) {
        let (a, b) = self.endpoints();
        (a.min(b), a.max(b))
    }

    #[inline]
    pub fn is_noop(&self) -> bool {
        let (a, b) = self.endpoints();
        a == b
    }

    /// Rejects endpoints outside the line or inside the fixed prefix.
    pub fn check(&self, instance: &Instance) -> Result<(), SequenceError> {
        let len = instance.nb_cars();
        let (lo, hi) = self.span();
        if hi >= len {
            return Err(SequenceError::PositionOutOfRange { position: hi, len });
        }
        if lo < instance.start_position() {
            return Err(SequenceError::FixedPrefixViolation { position: lo });
        }
        Ok(())
    }

    /// Original-plan index found at `pos` once the move is applied to `perm`.
    #[inline(always)]
    pub fn index_after(&self, perm: &[usize], pos: usize) -> usize {
        match *self {
            Move::Swap(i, j) => {
                if pos == i {
                    perm[j]
                } else if pos == j {
                    perm[i]
                } else {
                    perm[pos]
                }
            }
            Move::Relocate { from, to } => {
                if from < to {
                    if pos < from || pos > to {
                        perm[pos]
                    } else if pos == to {
                        perm[from]
                    } else {
                        perm[pos + 1]
                    }
                } else if pos < to || pos > from {
                    perm[pos]
                } else if pos == to {
                    perm[from]
                } else {
                    perm[pos - 1]
                }
            }
        }
    }

    /// Rewrites `perm` in place. Callers check the move first.
    pub fn apply_to(&self, perm: &mut [usize]) {
        match *self {
            Move::Swap(i, j) => perm.swap(i, j),
            Move::Relocate { from, to } => {
                if from < to {
                    perm[from..=to].rotate_left(1);
                } else if from > to {
                    perm[to..=from].rotate_right(1);
                }
            }
        }
    }
}
