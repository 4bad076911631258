use super::order::{ObjectiveKind, ObjectiveOrder};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Scale used to fold the three components into one number for reports.
pub const SCALAR_BASE: u64 = 10_000;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectiveVector {
    pub color_changes: u64,
    pub high_violations: u64,
    pub low_violations: u64,
}

impl ObjectiveVector {
    pub fn new(color_changes: u64, high_violations: u64, low_violations: u64) -> Self {
        Self {
            color_changes,
            high_violations,
            low_violations,
        }
    }

    #[inline]
    pub fn get(&self, kind: ObjectiveKind) -> u64 {
        match kind {
            ObjectiveKind::ColorChanges => self.color_changes,
            ObjectiveKind::HighPriority => self.high_violations,
            ObjectiveKind::LowPriority => self.low_violations,
        }
    }

    /// Components reordered by priority, highest first.
    pub fn ordered(&self, order: ObjectiveOrder) -> [u64; 3] {
        order.kinds().map(|kind| self.get(kind))
    }

    /// Weighted single number over the compared levels
    /// (`first * base^2 + second * base + third`).
    ///
    /// Only meaningful while every component stays below `base`; comparisons
    /// must go through [`super::compare`].
    pub fn scalarize(&self, order: ObjectiveOrder, base: u64) -> u128 {
        order.priority().iter().fold(0u128, |acc, &kind| {
            acc * base as u128 + self.get(kind) as u128
        })
    }

    /// Signed difference `other - self`.
    pub fn delta_to(&self, other: &ObjectiveVector) -> ObjectiveDelta {
        ObjectiveDelta {
            color_changes: other.color_changes as i64 - self.color_changes as i64,
            high_violations: other.high_violations as i64 - self.high_violations as i64,
            low_violations: other.low_violations as i64 - self.low_violations as i64,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectiveDelta {
    pub color_changes: i64,
    pub high_violations: i64,
    pub low_violations: i64,
}

impl ObjectiveDelta {
    pub const ZERO: ObjectiveDelta = ObjectiveDelta {
        color_changes: 0,
        high_violations: 0,
        low_violations: 0,
    };

    #[inline]
    pub fn get(&self, kind: ObjectiveKind) -> i64 {
        match kind {
            ObjectiveKind::ColorChanges => self.color_changes,
            ObjectiveKind::HighPriority => self.high_violations,
            ObjectiveKind::LowPriority => self.low_violations,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl AddAssign for ObjectiveDelta {
    fn add_assign(&mut self, rhs: Self) {
        self.color_changes += rhs.color_changes;
        self.high_violations += rhs.high_violations;
        self.low_violations += rhs.low_violations;
    }
}

impl Add<ObjectiveDelta> for ObjectiveVector {
    type Output = ObjectiveVector;

    fn add(self, rhs: ObjectiveDelta) -> ObjectiveVector {
        let shift = |value: u64, by: i64| {
            debug_assert!(
                value.checked_add_signed(by).is_some(),
                "delta {:?} drives {:?} negative",
                rhs,
                self
            );
            value.saturating_add_signed(by)
        };
        ObjectiveVector {
            color_changes: shift(self.color_changes, rhs.color_changes),
            high_violations: shift(self.high_violations, rhs.high_violations),
            low_violations: shift(self.low_violations, rhs.low_violations),
        }
    }
}

impl AddAssign<ObjectiveDelta> for ObjectiveVector {
    fn add_assign(&mut self, rhs: ObjectiveDelta) {
        *self = *self + rhs;
    }
}
