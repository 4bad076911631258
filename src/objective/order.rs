use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveKind {
    #[strum(to_string = "color", serialize = "color_changes")]
    ColorChanges,
    #[strum(to_string = "high", serialize = "high_priority")]
    HighPriority,
    #[strum(to_string = "low", serialize = "low_priority")]
    LowPriority,
}

/// Strict priority over the objective components.
///
/// `levels` is 2 for the two-level orders of the instance format (color/high
/// only); the third kind is then carried for completeness but never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectiveOrder {
    priority: [ObjectiveKind; 3],
    levels: usize,
}

use ObjectiveKind::{ColorChanges as C, HighPriority as H, LowPriority as L};

impl ObjectiveOrder {
    pub const COLOR_HIGH_LOW: ObjectiveOrder = ObjectiveOrder::full([C, H, L]);
    pub const HIGH_LOW_COLOR: ObjectiveOrder = ObjectiveOrder::full([H, L, C]);
    pub const HIGH_COLOR_LOW: ObjectiveOrder = ObjectiveOrder::full([H, C, L]);
    pub const COLOR_HIGH: ObjectiveOrder = ObjectiveOrder {
        priority: [C, H, L],
        levels: 2,
    };
    pub const HIGH_COLOR: ObjectiveOrder = ObjectiveOrder {
        priority: [H, C, L],
        levels: 2,
    };

    const fn full(priority: [ObjectiveKind; 3]) -> Self {
        Self {
            priority,
            levels: 3,
        }
    }

    /// Builds a three-level order; `None` unless the kinds are pairwise distinct.
    pub fn new(first: ObjectiveKind, second: ObjectiveKind, third: ObjectiveKind) -> Option<Self> {
        if first == second || second == third || first == third {
            return None;
        }
        Some(Self::full([first, second, third]))
    }

    /// Maps the integer code of the instance header.
    ///
    /// Without low-priority options the three-level codes collapse to the
    /// matching two-level ones (0 -> 3, 1 -> 4, 2 -> 4).
    pub fn from_code(code: u8, has_low_priority: bool) -> Option<Self> {
        let order = match (code, has_low_priority) {
            (0, true) => Self::COLOR_HIGH_LOW,
            (1, true) => Self::HIGH_LOW_COLOR,
            (2, true) => Self::HIGH_COLOR_LOW,
            (0, false) | (3, _) => Self::COLOR_HIGH,
            (1, false) | (2, false) | (4, _) => Self::HIGH_COLOR,
            _ => return None,
        };
        Some(order)
    }

    /// The header code this order corresponds to, if any.
    pub fn code(&self) -> Option<u8> {
        [
            Self::COLOR_HIGH_LOW,
            Self::HIGH_LOW_COLOR,
            Self::HIGH_COLOR_LOW,
            Self::COLOR_HIGH,
            Self::HIGH_COLOR,
        ]
        .iter()
        .position(|o| o == self)
        .map(|p| p as u8)
    }

    #[inline]
    pub fn priority(&self) -> &[ObjectiveKind] {
        &self.priority[..self.levels]
    }

    /// All three kinds, including an uncompared trailing one.
    pub fn kinds(&self) -> [ObjectiveKind; 3] {
        self.priority
    }

    pub fn levels(&self) -> usize {
        self.levels
    }
}

impl Default for ObjectiveOrder {
    fn default() -> Self {
        Self::COLOR_HIGH_LOW
    }
}

impl fmt::Display for ObjectiveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.priority().iter().map(|k| k.to_string()).collect();
        write!(f, "{}", names.join(","))
    }
}

impl FromStr for ObjectiveOrder {
    type Err = String;

    /// Accepts `"high,color,low"` or a two-level `"color,high"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kinds = s
            .split(',')
            .map(|part| {
                ObjectiveKind::from_str(part.trim())
                    .map_err(|_| format!("Unknown objective '{}'", part.trim()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match kinds.as_slice() {
            [a, b, c] => ObjectiveOrder::new(*a, *b, *c)
                .ok_or_else(|| format!("Objective order '{}' repeats a component", s)),
            [a, b] if a != b => {
                let missing = ObjectiveKind::iter().find(|k| k != a && k != b).unwrap_or(L);
                Ok(ObjectiveOrder {
                    priority: [*a, *b, missing],
                    levels: 2,
                })
            }
            _ => Err(format!(
                "Objective order '{}' needs 2 or 3 distinct components",
                s
            )),
        }
    }
}

impl TryFrom<String> for ObjectiveOrder {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ObjectiveOrder> for String {
    fn from(order: ObjectiveOrder) -> Self {
        order.to_string()
    }
}
