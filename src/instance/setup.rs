use super::{Instance, InstanceParts, OptionSet};
use crate::error::{CarSeqError, CsResult};
use tracing::{debug, info};

/// Checks the structural invariants and flattens the class table into
/// per-car lookups. After this point nothing re-validates the instance.
pub fn build_instance(parts: InstanceParts) -> CsResult<Instance> {
    let InstanceParts {
        options,
        classes,
        max_paint_batch,
        objective_order,
        start_position,
        original_plan,
    } = parts;

    if options.len() > OptionSet::CAPACITY {
        return Err(CarSeqError::Instance(format!(
            "{} options exceed the supported maximum of {}",
            options.len(),
            OptionSet::CAPACITY
        )));
    }

    for (o, option) in options.iter().enumerate() {
        if option.window_size == 0 {
            return Err(CarSeqError::Instance(format!(
                "option {} has an empty window",
                o
            )));
        }
        if option.max_count as usize > option.window_size {
            return Err(CarSeqError::Instance(format!(
                "option {} allows {} cars in a window of {}",
                o, option.max_count, option.window_size
            )));
        }
    }

    if max_paint_batch == 0 {
        return Err(CarSeqError::Instance(
            "paint batch limit must be at least 1".to_string(),
        ));
    }

    for (c, class) in classes.iter().enumerate() {
        if let Some(o) = class.requires.iter().find(|&o| o >= options.len()) {
            return Err(CarSeqError::Instance(format!(
                "class {} requires unknown option {}",
                c, o
            )));
        }
    }

    let original_plan = match original_plan {
        Some(plan) => {
            let mut seen = vec![0usize; classes.len()];
            for (position, &class) in plan.iter().enumerate() {
                let slot = seen.get_mut(class).ok_or_else(|| {
                    CarSeqError::Instance(format!(
                        "plan position {} names unknown class {}",
                        position, class
                    ))
                })?;
                *slot += 1;
            }
            if let Some((c, _)) = classes
                .iter()
                .zip(&seen)
                .enumerate()
                .find(|(_, (class, n))| class.count != **n)
            {
                return Err(CarSeqError::Instance(format!(
                    "class {} appears {} times in the plan but declares {} cars",
                    c, seen[c], classes[c].count
                )));
            }
            plan
        }
        None => classes
            .iter()
            .enumerate()
            .flat_map(|(c, class)| std::iter::repeat(c).take(class.count))
            .collect(),
    };

    let nb_cars = original_plan.len();
    if start_position > nb_cars {
        return Err(CarSeqError::Instance(format!(
            "start position {} is beyond the {} cars",
            start_position, nb_cars
        )));
    }

    let car_colors: Vec<u32> = original_plan.iter().map(|&c| classes[c].color).collect();
    let car_requires: Vec<OptionSet> = original_plan
        .iter()
        .map(|&c| classes[c].requires)
        .collect();

    for (o, option) in options.iter().enumerate() {
        debug!(
            "Option {}: at most {} per {} ({} priority)",
            o,
            option.max_count,
            option.window_size,
            if option.is_high_priority { "high" } else { "low" }
        );
    }
    info!(
        "Instance ready: {} cars, {} options, {} classes, fixed prefix {}, order {}",
        nb_cars,
        options.len(),
        classes.len(),
        start_position,
        objective_order
    );

    Ok(Instance {
        options,
        max_paint_batch,
        objective_order,
        start_position,
        original_plan,
        car_colors,
        car_requires,
    })
}
