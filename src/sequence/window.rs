use super::touched::WindowShift;
use crate::instance::Instance;
use std::ops::Range;

/// Slides a window of option `o` across `windows`, reporting the number of
/// cars requiring `o` in every window start. `at` maps a position to the car
/// placed there, so the same walk serves stored and hypothetical sequences.
///
/// Costs `window_size + windows.len()` lookups.
#[inline]
pub fn slide_counts<F, S>(
    instance: &Instance,
    o: usize,
    windows: Range<usize>,
    at: F,
    mut sink: S,
) where
    F: Fn(usize) -> usize,
    S: FnMut(usize, u32),
{
    if windows.is_empty() {
        return;
    }
    let size = instance.option(o).window_size;
    let first = windows.start;
    let mut count: u32 = (first..first + size)
        .map(|k| instance.demand(at(k), o))
        .sum();
    sink(first, count);
    for w in first + 1..windows.end {
        count += instance.demand(at(w + size - 1), o);
        count -= instance.demand(at(w - 1), o);
        sink(w, count);
    }
}

/// Per-option count of cars requiring the option in every scanned window.
///
/// All options share one flat buffer; `offsets[o]` is where option `o`'s
/// windows begin, and slot `offsets[o] + (w - scans[o].start)` holds window `w`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowCache {
    counts: Vec<u32>,
    offsets: Vec<usize>,
    scans: Vec<Range<usize>>,
}

impl WindowCache {
    pub fn build(instance: &Instance, perm: &[usize]) -> Self {
        let scans: Vec<Range<usize>> = (0..instance.nb_options())
            .map(|o| instance.window_range(o))
            .collect();

        let mut offsets = Vec::with_capacity(scans.len() + 1);
        let mut total = 0;
        for scan in &scans {
            offsets.push(total);
            total += scan.len();
        }
        offsets.push(total);

        let mut cache = Self {
            counts: vec![0; total],
            offsets,
            scans,
        };
        cache.refill(instance, perm);
        cache
    }

    /// Recounts every window from `perm` without reallocating.
    pub fn refill(&mut self, instance: &Instance, perm: &[usize]) {
        for (o, scan) in self.scans.iter().enumerate() {
            let base = self.offsets[o];
            let first = scan.start;
            let counts = &mut self.counts;
            slide_counts(
                instance,
                o,
                scan.clone(),
                |k| perm[k],
                |w, c| {
                    counts[base + w - first] = c;
                },
            );
        }
    }

    #[inline(always)]
    fn slot(&self, o: usize, w: usize) -> usize {
        debug_assert!(self.scans[o].contains(&w));
        self.offsets[o] + w - self.scans[o].start
    }

    #[inline]
    pub fn scan(&self, o: usize) -> Range<usize> {
        self.scans[o].clone()
    }

    #[inline(always)]
    pub fn count(&self, o: usize, w: usize) -> u32 {
        self.counts[self.slot(o, w)]
    }

    pub fn counts(&self, o: usize) -> &[u32] {
        &self.counts[self.offsets[o]..self.offsets[o + 1]]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, o: usize, w: usize, count: u32) {
        let slot = self.slot(o, w);
        self.counts[slot] = count;
    }

    /// Moves the counts of a shifted range by one window.
    pub(crate) fn shift(&mut self, o: usize, shift: &WindowShift) {
        let windows = &shift.windows;
        if windows.is_empty() {
            return;
        }
        let start = self.slot(o, windows.start);
        let len = windows.len();
        if shift.forward {
            self.counts.copy_within(start + 1..start + 1 + len, start);
        } else {
            self.counts.copy_within(start - 1..start - 1 + len, start);
        }
    }

    /// High and low priority violation totals over the cached windows.
    pub fn violations(&self, instance: &Instance) -> (u64, u64) {
        let mut high = 0;
        let mut low = 0;
        for (o, option) in instance.options().iter().enumerate() {
            let total: u64 = self.counts(o).iter().map(|&c| option.excess(c)).sum();
            if option.is_high_priority {
                high += total;
            } else {
                low += total;
            }
        }
        (high, low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{CarClass, CarOption, InstanceParts, OptionSet};
    use crate::objective::ObjectiveOrder;

    fn instance() -> Instance {
        Instance::new(InstanceParts {
            options: vec![CarOption {
                max_count: 1,
                window_size: 2,
                is_high_priority: true,
            }],
            classes: vec![
                CarClass {
                    color: 0,
                    count: 3,
                    requires: OptionSet::from_flags(&[true]).unwrap(),
                },
                CarClass {
                    color: 1,
                    count: 2,
                    requires: OptionSet::empty(),
                },
            ],
            max_paint_batch: 5,
            objective_order: ObjectiveOrder::COLOR_HIGH_LOW,
            start_position: 0,
            original_plan: None,
        })
        .unwrap()
    }

    #[test]
    fn counts_match_windows() {
        let inst = instance();
        let cache = WindowCache::build(&inst, &inst.identity_sequence());
        // demand per position: 1 1 1 0 0
        assert_eq!(cache.counts(0), &[2, 2, 1, 0]);
        assert_eq!(cache.violations(&inst), (2, 0));
        assert_eq!(cache.scan(0), 0..4);
    }

    #[test]
    fn shift_moves_counts() {
        let inst = instance();
        let mut cache = WindowCache::build(&inst, &inst.identity_sequence());
        cache.shift(
            0,
            &WindowShift {
                windows: 0..2,
                forward: true,
            },
        );
        assert_eq!(cache.counts(0), &[2, 1, 1, 0]);
        cache.shift(
            0,
            &WindowShift {
                windows: 2..4,
                forward: false,
            },
        );
        assert_eq!(cache.counts(0), &[2, 1, 1, 1]);
    }
}
