use crate::instance::Instance;
use crate::validator;
use fastrand::Rng;

/// Fixed prefix followed by a uniform shuffle of the remaining cars.
pub fn random_sequence(rng: &mut Rng, instance: &Instance) -> Vec<usize> {
    let mut sequence = instance.identity_sequence();
    rng.shuffle(&mut sequence[instance.start_position()..]);
    sequence
}

/// Draws random sequences until one respects the paint batch limit.
pub fn random_feasible_sequence(
    rng: &mut Rng,
    instance: &Instance,
    max_attempts: usize,
) -> Option<Vec<usize>> {
    (0..max_attempts)
        .map(|_| random_sequence(rng, instance))
        .find(|s| validator::paint_batch(instance, |k| s[k]).is_feasible())
}

/// Greedy start that groups the suffix into single-color batches.
///
/// Repeatedly emits up to `max_paint_batch` cars of the color with the most
/// cars left, never the color that ended the previous batch. Cars of a color
/// keep their plan order. Only when a single color remains may the result
/// overrun the limit.
pub fn color_batched_sequence(instance: &Instance) -> Vec<usize> {
    let start = instance.start_position();
    let mut sequence: Vec<usize> = (0..start).collect();

    let mut pending: Vec<(u32, Vec<usize>)> = Vec::new();
    for car in start..instance.nb_cars() {
        let color = instance.color(car);
        match pending.iter_mut().find(|(c, _)| *c == color) {
            Some((_, cars)) => cars.push(car),
            None => pending.push((color, vec![car])),
        }
    }
    // Cars are taken from the back of each list.
    for (_, cars) in pending.iter_mut() {
        cars.reverse();
    }

    let limit = instance.max_paint_batch();
    let mut last = sequence.last().map(|&car| instance.color(car));
    while let Some(slot) = pending
        .iter()
        .enumerate()
        .filter(|(_, (c, cars))| !cars.is_empty() && Some(*c) != last)
        .max_by_key(|(i, (_, cars))| (cars.len(), std::cmp::Reverse(*i)))
        .map(|(i, _)| i)
        .or_else(|| pending.iter().position(|(_, cars)| !cars.is_empty()))
    {
        let (color, cars) = &mut pending[slot];
        let take = limit.min(cars.len());
        for _ in 0..take {
            if let Some(car) = cars.pop() {
                sequence.push(car);
            }
        }
        last = Some(*color);
    }
    sequence
}
