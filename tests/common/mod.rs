#![allow(dead_code)]

use carseq::instance::{CarClass, CarOption, Instance, InstanceParts, OptionSet};
use carseq::objective::{ObjectiveOrder, ObjectiveVector};
use carseq::sequence::Move;
use proptest::prelude::*;
use std::sync::Arc;

/// Six cars `A A A B B B`, one high priority option 2/3 required by A,
/// color 0 for A and 1 for B, paint batch 3.
pub fn example_instance() -> Arc<Instance> {
    Arc::new(
        Instance::new(InstanceParts {
            options: vec![CarOption {
                max_count: 2,
                window_size: 3,
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
                    count: 3,
                    requires: OptionSet::empty(),
                },
            ],
            max_paint_batch: 3,
            objective_order: ObjectiveOrder::COLOR_HIGH_LOW,
            start_position: 0,
            original_plan: None,
        })
        .expect("example instance"),
    )
}

pub fn instance_from_text(text: &str) -> Arc<Instance> {
    let instance = Instance::from_reader(text.as_bytes()).expect("instance text");
    Arc::new(instance)
}

/// Literal definition: every window overlapping the suffix, every boundary
/// from the start position on.
pub fn brute_force(instance: &Instance, sequence: &[usize]) -> ObjectiveVector {
    let n = instance.nb_cars();
    let start = instance.start_position();
    let mut objective = ObjectiveVector::default();

    for p in 0..n.saturating_sub(1) {
        if p + 1 >= start.max(1) && instance.color(sequence[p]) != instance.color(sequence[p + 1]) {
            objective.color_changes += 1;
        }
    }

    for (o, option) in instance.options().iter().enumerate() {
        let size = option.window_size;
        if n < size {
            continue;
        }
        for w in 0..=n - size {
            if w + size <= start {
                continue;
            }
            let count = (w..w + size)
                .filter(|&k| instance.requires(sequence[k], o))
                .count() as u64;
            let excess = count.saturating_sub(option.max_count as u64);
            if option.is_high_priority {
                objective.high_violations += excess;
            } else {
                objective.low_violations += excess;
            }
        }
    }
    objective
}

pub fn moved(sequence: &[usize], mv: Move) -> Vec<usize> {
    let mut out = sequence.to_vec();
    mv.apply_to(&mut out);
    out
}

/// Every swap and relocation whose endpoints lie in the suffix.
pub fn all_moves(instance: &Instance) -> Vec<Move> {
    let n = instance.nb_cars();
    let start = instance.start_position();
    let mut moves = Vec::new();
    for a in start..n {
        for b in start..n {
            if a < b {
                moves.push(Move::Swap(a, b));
            }
            if a != b {
                moves.push(Move::Relocate { from: a, to: b });
            }
        }
    }
    moves
}

prop_compose! {
    fn arb_option()(size in 1usize..7, high in any::<bool>())
        (max_count in 0..=size as u32, window_size in Just(size), is_high_priority in Just(high))
        -> CarOption {
        CarOption { max_count, window_size, is_high_priority }
    }
}

prop_compose! {
    fn arb_class(nb_options: usize)(
        color in 0u32..4,
        count in 0usize..7,
        flags in proptest::collection::vec(any::<bool>(), nb_options)
    ) -> CarClass {
        CarClass { color, count, requires: OptionSet::from_flags(&flags).unwrap() }
    }
}

prop_compose! {
    fn arb_parts()(options in proptest::collection::vec(arb_option(), 1..4))
        (classes in proptest::collection::vec(arb_class(options.len()), 1..5),
         options in Just(options),
         max_paint_batch in 1usize..6,
         start_fraction in 0.0..0.6f64,
         code in 0u8..3) -> InstanceParts {
        let nb_cars: usize = classes.iter().map(|c| c.count).sum();
        let has_low = options.iter().any(|o| !o.is_high_priority);
        InstanceParts {
            objective_order: ObjectiveOrder::from_code(code, has_low).unwrap(),
            start_position: (nb_cars as f64 * start_fraction) as usize,
            options,
            classes,
            max_paint_batch,
            original_plan: None,
        }
    }
}

prop_compose! {
    /// A random instance together with a random permutation of its suffix.
    pub fn arb_instance_and_sequence()(parts in arb_parts(), seed in any::<u64>())
        -> (Arc<Instance>, Vec<usize>) {
        let instance = Arc::new(Instance::new(parts).unwrap());
        let mut rng = fastrand::Rng::with_seed(seed);
        let sequence = carseq::candidates::random_sequence(&mut rng, &instance);
        (instance, sequence)
    }
}

/// Raw move picks, mapped into the suffix of a concrete instance with [`to_move`].
pub fn arb_raw_moves(max: usize) -> impl Strategy<Value = Vec<(bool, usize, usize)>> {
    proptest::collection::vec((any::<bool>(), any::<usize>(), any::<usize>()), 0..max)
}

pub fn to_move(instance: &Instance, (swap, a, b): (bool, usize, usize)) -> Option<Move> {
    let start = instance.start_position();
    let span = instance.nb_cars().checked_sub(start).filter(|&s| s > 0)?;
    let a = start + a % span;
    let b = start + b % span;
    Some(if swap {
        Move::Swap(a, b)
    } else {
        Move::Relocate { from: a, to: b }
    })
}
