use crate::error::SequenceError;
use crate::instance::Instance;
use crate::objective::ObjectiveDelta;
use crate::sequence::moves::Move;
use crate::sequence::touched::{TouchedBoundaries, TouchedWindows};
use crate::sequence::window::{slide_counts, WindowCache};
use crate::sequence::SequenceState;

/// Exact objective change `mv` would cause, without touching `state`.
///
/// Work is bounded by the sum of window sizes plus a constant number of color
/// boundaries; nothing is allocated. Relocations over long spans reuse the
/// cached counts of the windows that merely shift by one position.
pub fn evaluate_delta(state: &SequenceState, mv: Move) -> Result<ObjectiveDelta, SequenceError> {
    let instance = state.instance();
    mv.check(instance)?;
    if mv.is_noop() {
        return Ok(ObjectiveDelta::ZERO);
    }

    let perm = state.sequence();
    let cache = state.cache();
    let mut delta = ObjectiveDelta {
        color_changes: color_delta(instance, perm, &mv),
        ..Default::default()
    };

    for (o, option) in instance.options().iter().enumerate() {
        let d = option_delta(instance, cache, perm, &mv, o);
        if option.is_high_priority {
            delta.high_violations += d;
        } else {
            delta.low_violations += d;
        }
    }
    Ok(delta)
}

fn color_delta(instance: &Instance, perm: &[usize], mv: &Move) -> i64 {
    let touched = TouchedBoundaries::of(mv, instance.nb_cars());
    let first = instance.color_boundary_start();

    let before = touched
        .before()
        .iter()
        .filter(|&&b| b >= first && instance.color(perm[b - 1]) != instance.color(perm[b]))
        .count();
    let after = touched
        .after()
        .iter()
        .filter(|&&b| {
            b >= first
                && instance.color(mv.index_after(perm, b - 1))
                    != instance.color(mv.index_after(perm, b))
        })
        .count();

    after as i64 - before as i64
}

fn option_delta(
    instance: &Instance,
    cache: &WindowCache,
    perm: &[usize],
    mv: &Move,
    o: usize,
) -> i64 {
    let option = instance.option(o);
    let touched = TouchedWindows::of(mv, option.window_size, cache.scan(o));
    let mut d = 0i64;

    for windows in &touched.direct {
        slide_counts(
            instance,
            o,
            windows.clone(),
            |k| mv.index_after(perm, k),
            |w, count| {
                d += option.excess(count) as i64 - option.excess(cache.count(o, w)) as i64;
            },
        );
    }

    // A shifted range only changes the sum at its two ends.
    if let Some(shift) = &touched.shift {
        d += option.excess(cache.count(o, shift.entering())) as i64
            - option.excess(cache.count(o, shift.leaving())) as i64;
    }
    d
}
