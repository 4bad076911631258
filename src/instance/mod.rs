pub mod loader;
pub mod setup;

use crate::error::CsResult;
use crate::objective::ObjectiveOrder;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Range;
use std::path::Path;

/// Fixed-size requirement bitset indexed by option id.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionSet(u64);

impl OptionSet {
    pub const CAPACITY: usize = 64;

    pub fn empty() -> Self {
        Self(0)
    }

    /// `None` when there are more flags than the set can hold.
    pub fn from_flags(flags: &[bool]) -> Option<Self> {
        if flags.len() > Self::CAPACITY {
            return None;
        }
        let mut set = Self::empty();
        for (o, _) in flags.iter().enumerate().filter(|(_, &f)| f) {
            set.0 |= 1 << o;
        }
        Some(set)
    }

    #[inline(always)]
    pub fn contains(&self, option: usize) -> bool {
        (self.0 >> option) & 1 == 1
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Self::CAPACITY).filter(move |&o| self.contains(o))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarOption {
    pub max_count: u32,
    pub window_size: usize,
    pub is_high_priority: bool,
}

impl CarOption {
    /// Violation contributed by one window holding `count` cars with this option.
    #[inline(always)]
    pub fn excess(&self, count: u32) -> u64 {
        count.saturating_sub(self.max_count) as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarClass {
    pub color: u32,
    pub count: usize,
    pub requires: OptionSet,
}

/// Everything needed to build an [`Instance`]; checked by [`setup::build_instance`].
#[derive(Debug, Clone, Default)]
pub struct InstanceParts {
    pub options: Vec<CarOption>,
    pub classes: Vec<CarClass>,
    pub max_paint_batch: usize,
    pub objective_order: ObjectiveOrder,
    pub start_position: usize,
    /// Class id per car. When absent each class is repeated `count` times in order.
    pub original_plan: Option<Vec<usize>>,
}

impl InstanceParts {
    /// Replaces the objective order and paint batch limit where given.
    pub fn with_overrides(
        mut self,
        objective_order: Option<ObjectiveOrder>,
        max_paint_batch: Option<usize>,
    ) -> Self {
        if let Some(order) = objective_order {
            self.objective_order = order;
        }
        if let Some(limit) = max_paint_batch {
            self.max_paint_batch = limit;
        }
        self
    }
}

/// The immutable problem. Shared read-only (usually behind an `Arc`) by every
/// sequence state and worker.
#[derive(Debug, Clone)]
pub struct Instance {
    options: Vec<CarOption>,
    max_paint_batch: usize,
    objective_order: ObjectiveOrder,
    start_position: usize,
    original_plan: Vec<usize>,

    // Per original-plan index, flattened from the class table.
    car_colors: Vec<u32>,
    car_requires: Vec<OptionSet>,
}

impl Instance {
    pub fn new(parts: InstanceParts) -> CsResult<Self> {
        setup::build_instance(parts)
    }

    pub fn from_reader<R: Read>(reader: R) -> CsResult<Self> {
        setup::build_instance(loader::load_instance(reader)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CsResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    #[inline]
    pub fn nb_cars(&self) -> usize {
        self.original_plan.len()
    }

    #[inline]
    pub fn nb_options(&self) -> usize {
        self.options.len()
    }

    pub fn options(&self) -> &[CarOption] {
        &self.options
    }

    #[inline]
    pub fn option(&self, o: usize) -> &CarOption {
        &self.options[o]
    }

    pub fn max_paint_batch(&self) -> usize {
        self.max_paint_batch
    }

    pub fn objective_order(&self) -> ObjectiveOrder {
        self.objective_order
    }

    pub fn start_position(&self) -> usize {
        self.start_position
    }

    pub fn original_plan(&self) -> &[usize] {
        &self.original_plan
    }

    pub fn has_low_priority_options(&self) -> bool {
        self.options.iter().any(|o| !o.is_high_priority)
    }

    #[inline(always)]
    pub fn color(&self, car: usize) -> u32 {
        self.car_colors[car]
    }

    #[inline(always)]
    pub fn requires(&self, car: usize, option: usize) -> bool {
        self.car_requires[car].contains(option)
    }

    #[inline(always)]
    pub fn demand(&self, car: usize, option: usize) -> u32 {
        self.requires(car, option) as u32
    }

    pub fn class_of(&self, car: usize) -> usize {
        self.original_plan[car]
    }

    /// The unchanged plan: position `i` holds car `i`.
    pub fn identity_sequence(&self) -> Vec<usize> {
        (0..self.nb_cars()).collect()
    }

    /// Window starts scanned for option `o`: every window overlapping the
    /// mutable suffix. Empty when the line is shorter than the window.
    pub fn window_range(&self, o: usize) -> Range<usize> {
        let n = self.nb_cars();
        let size = self.options[o].window_size;
        if n < size {
            return 0..0;
        }
        (self.start_position + 1).saturating_sub(size)..n - size + 1
    }

    /// First boundary `b` (between positions `b - 1` and `b`) counted as a
    /// color change. Transitions inside the fixed prefix do not count.
    pub fn color_boundary_start(&self) -> usize {
        self.start_position.max(1)
    }
}
