//! Which adjacency boundaries and which option windows a move can change.
//!
//! Validator, evaluator and applicator all derive their neighborhoods from
//! here so that they agree on what a move affects.

use super::moves::Move;
use std::ops::Range;

/// Boundary `b` sits between positions `b - 1` and `b`.
///
/// `before` lists the boundaries of the current sequence whose neighbours are
/// replaced, `after` the boundaries of the moved sequence that did not exist
/// before. Every other boundary keeps its pair of cars (possibly shifted by
/// one position for a relocation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchedBoundaries {
    before: [usize; 4],
    before_len: usize,
    after: [usize; 4],
    after_len: usize,
}

impl TouchedBoundaries {
    pub fn of(mv: &Move, nb_cars: usize) -> Self {
        if mv.is_noop() {
            return Self {
                before: [0; 4],
                before_len: 0,
                after: [0; 4],
                after_len: 0,
            };
        }

        let (before, after): (&[usize], &[usize]) = match *mv {
            Move::Swap(..) => {
                let (lo, hi) = mv.span();
                let set = [lo, lo + 1, hi, hi + 1];
                return Self::packed(&set, &set, nb_cars);
            }
            Move::Relocate { from, to } if from < to => {
                (&[from, from + 1, to + 1], &[from, to, to + 1])
            }
            Move::Relocate { from, to } => (&[to, from, from + 1], &[to, to + 1, from + 1]),
        };
        Self::packed(before, after, nb_cars)
    }

    fn packed(before: &[usize], after: &[usize], nb_cars: usize) -> Self {
        let (before, before_len) = pack(before, nb_cars);
        let (after, after_len) = pack(after, nb_cars);
        Self {
            before,
            before_len,
            after,
            after_len,
        }
    }

    pub fn before(&self) -> &[usize] {
        &self.before[..self.before_len]
    }

    pub fn after(&self) -> &[usize] {
        &self.after[..self.after_len]
    }
}

/// Keeps the ascending, distinct boundaries that exist on a line of `nb_cars`.
fn pack(values: &[usize], nb_cars: usize) -> ([usize; 4], usize) {
    let mut out = [0; 4];
    let mut len = 0;
    for &b in values {
        if b == 0 || b >= nb_cars {
            continue;
        }
        if len > 0 && out[len - 1] == b {
            continue;
        }
        out[len] = b;
        len += 1;
    }
    (out, len)
}

/// Windows of one option whose content a move changes.
///
/// `direct` windows must be recounted. `shift` windows keep their content but
/// move by one index, so only one cached count leaves and one enters the sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchedWindows {
    pub direct: [Range<usize>; 2],
    pub shift: Option<WindowShift>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowShift {
    pub windows: Range<usize>,
    /// Forward relocations pull counts from `w + 1`, backward ones from `w - 1`.
    pub forward: bool,
}

impl WindowShift {
    /// Window whose current count no longer appears after the move.
    #[inline]
    pub fn leaving(&self) -> usize {
        if self.forward {
            self.windows.start
        } else {
            self.windows.end - 1
        }
    }

    /// Window whose current count is newly taken over by the shifted range.
    #[inline]
    pub fn entering(&self) -> usize {
        if self.forward {
            self.windows.end
        } else {
            self.windows.start - 1
        }
    }
}

impl TouchedWindows {
    pub fn empty() -> Self {
        Self {
            direct: [0..0, 0..0],
            shift: None,
        }
    }

    /// Touched windows for an option of size `window_size` whose window starts
    /// are scanned over `scan`. Endpoints are assumed to lie inside the
    /// mutable suffix, which is never left of `scan.start`.
    pub fn of(mv: &Move, window_size: usize, scan: Range<usize>) -> Self {
        if scan.is_empty() || mv.is_noop() {
            return Self::empty();
        }

        match *mv {
            Move::Swap(..) => {
                let (lo, hi) = mv.span();
                let first = clip(containing(lo, window_size), &scan);
                let mut second = clip(containing(hi, window_size), &scan);
                if second.start < first.end {
                    second.start = first.end.min(second.end);
                }
                Self {
                    direct: [first, second],
                    shift: None,
                }
            }
            Move::Relocate { from, to } if from < to => {
                let split = (to + 1).saturating_sub(window_size).max(from);
                let shift = (split > from).then(|| WindowShift {
                    windows: from..split,
                    forward: true,
                });
                Self {
                    direct: [
                        clip((from + 1).saturating_sub(window_size)..from, &scan),
                        clip(split..to + 1, &scan),
                    ],
                    shift,
                }
            }
            Move::Relocate { from, to } => {
                let split = (from + 2).saturating_sub(window_size).max(to + 1);
                let shift = (split > to + 1).then(|| WindowShift {
                    windows: to + 1..split,
                    forward: false,
                });
                Self {
                    direct: [
                        clip(containing(to, window_size), &scan),
                        clip(split..from + 1, &scan),
                    ],
                    shift,
                }
            }
        }
    }

    /// Number of windows whose count changes or moves.
    pub fn len(&self) -> usize {
        self.direct.iter().map(|r| r.len()).sum::<usize>()
            + self.shift.as_ref().map_or(0, |s| s.windows.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Window starts whose window covers `pos`.
#[inline]
fn containing(pos: usize, window_size: usize) -> Range<usize> {
    (pos + 1).saturating_sub(window_size)..pos + 1
}

#[inline]
fn clip(range: Range<usize>, scan: &Range<usize>) -> Range<usize> {
    let start = range.start.max(scan.start);
    let end = range.end.min(scan.end);
    start..end.max(start)
}
