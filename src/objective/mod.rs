pub mod order;
pub mod types;

pub use self::order::{ObjectiveKind, ObjectiveOrder};
pub use self::types::{ObjectiveDelta, ObjectiveVector};

use std::cmp::Ordering;

/// Strict-priority comparison of two objective vectors.
///
/// `Less` means `a` is strictly better than `b` under `order`. Components are
/// compared one after the other; a tie falls through to the next priority.
pub fn compare(a: &ObjectiveVector, b: &ObjectiveVector, order: ObjectiveOrder) -> Ordering {
    order.priority().iter().fold(Ordering::Equal, |acc, &kind| {
        acc.then_with(|| a.get(kind).cmp(&b.get(kind)))
    })
}

/// Orders a delta against "no change": `Less` means the move improves the
/// objective under `order`.
pub fn compare_delta(delta: &ObjectiveDelta, order: ObjectiveOrder) -> Ordering {
    order.priority().iter().fold(Ordering::Equal, |acc, &kind| {
        acc.then_with(|| delta.get(kind).cmp(&0))
    })
}
