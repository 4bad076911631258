use super::{CarClass, CarOption, InstanceParts, OptionSet};
use crate::error::{CarSeqError, CsResult};
use crate::objective::ObjectiveOrder;
use std::io::Read;
use std::str::SplitWhitespace;
use tracing::{debug, info};

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    index: usize,
}

impl<'a> Tokens<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            inner: content.split_whitespace(),
            index: 0,
        }
    }

    fn error(&self, message: String) -> CarSeqError {
        CarSeqError::Parse {
            token: self.index,
            message,
        }
    }

    fn next_usize(&mut self, what: &str) -> CsResult<usize> {
        self.try_next_usize(what)?
            .ok_or_else(|| self.error(format!("unexpected end of input, expected {}", what)))
    }

    /// Like `next_usize`, but the end of input is `None`.
    fn try_next_usize(&mut self, what: &str) -> CsResult<Option<usize>> {
        let raw = match self.inner.next() {
            Some(raw) => raw,
            None => return Ok(None),
        };
        self.index += 1;
        raw.parse()
            .map(Some)
            .map_err(|_| self.error(format!("'{}' is not a valid {}", raw, what)))
    }

    fn next_flag(&mut self, what: &str) -> CsResult<bool> {
        match self.next_usize(what)? {
            0 => Ok(false),
            1 => Ok(true),
            v => Err(self.error(format!("{} must be 0 or 1, got {}", what, v))),
        }
    }
}

/// Parses the whitespace-separated instance format:
///
/// ```text
/// nb_cars nb_options nb_classes max_paint_batch objective_order start_position
/// max_count window_size is_high          (one triple per option)
/// color count req_0 .. req_{k-1}         (one row per class)
/// [class id per car]                     (optional original plan)
/// ```
pub fn load_instance<R: Read>(mut reader: R) -> CsResult<InstanceParts> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    let mut tokens = Tokens::new(&content);

    let nb_cars = tokens.next_usize("car count")?;
    let nb_options = tokens.next_usize("option count")?;
    let nb_classes = tokens.next_usize("class count")?;
    let max_paint_batch = tokens.next_usize("paint batch limit")?;
    let order_code = tokens.next_usize("objective order")?;
    let start_position = tokens.next_usize("start position")?;

    if nb_options > OptionSet::CAPACITY {
        return Err(CarSeqError::Instance(format!(
            "{} options exceed the supported maximum of {}",
            nb_options,
            OptionSet::CAPACITY
        )));
    }

    let mut options = Vec::with_capacity(nb_options);
    for _ in 0..nb_options {
        let max_count = tokens.next_usize("option max count")?;
        let window_size = tokens.next_usize("option window size")?;
        let is_high_priority = tokens.next_flag("option priority flag")?;
        options.push(CarOption {
            max_count: u32::try_from(max_count)
                .map_err(|_| tokens.error(format!("max count {} too large", max_count)))?,
            window_size,
            is_high_priority,
        });
    }

    let mut classes = Vec::with_capacity(nb_classes);
    for _ in 0..nb_classes {
        let color = tokens.next_usize("class color")?;
        let count = tokens.next_usize("class car count")?;
        let mut flags = Vec::with_capacity(nb_options);
        for _ in 0..nb_options {
            flags.push(tokens.next_flag("option requirement")?);
        }
        classes.push(CarClass {
            color: u32::try_from(color)
                .map_err(|_| tokens.error(format!("color {} too large", color)))?,
            count,
            requires: OptionSet::from_flags(&flags)
                .ok_or_else(|| tokens.error(format!("too many option flags ({})", flags.len())))?,
        });
    }

    let has_low = options.iter().any(|o| !o.is_high_priority);
    let objective_order = u8::try_from(order_code)
        .ok()
        .and_then(|code| ObjectiveOrder::from_code(code, has_low))
        .ok_or_else(|| CarSeqError::Instance(format!("unknown objective order {}", order_code)))?;

    let total: usize = classes.iter().map(|c| c.count).sum();
    if total != nb_cars {
        return Err(CarSeqError::Instance(format!(
            "sum of cars per class ({}) does not equal the car count ({})",
            total, nb_cars
        )));
    }

    let mut plan = Vec::new();
    while let Some(class) = tokens.try_next_usize("plan class id")? {
        plan.push(class);
    }
    let original_plan = match plan.len() {
        0 => None,
        n if n == nb_cars => Some(plan),
        n => {
            return Err(CarSeqError::Instance(format!(
                "trailing plan has {} entries, expected {}",
                n, nb_cars
            )))
        }
    };

    debug!(
        "Parsed header: {} cars, {} options, {} classes, batch {}, order {}, start {}",
        nb_cars, nb_options, nb_classes, max_paint_batch, objective_order, start_position
    );
    info!(
        "Loaded instance with {} cars{}",
        nb_cars,
        if original_plan.is_some() {
            " and an explicit plan"
        } else {
            ""
        }
    );

    Ok(InstanceParts {
        options,
        classes,
        max_paint_batch,
        objective_order,
        start_position,
        original_plan,
    })
}

/// Reads a candidate sequence: whitespace-separated original-plan indices.
pub fn load_solution<R: Read>(mut reader: R) -> CsResult<Vec<usize>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    let mut tokens = Tokens::new(&content);
    let mut sequence = Vec::new();
    while let Some(index) = tokens.try_next_usize("car index")? {
        sequence.push(index);
    }
    debug!("Loaded candidate sequence of {} cars", sequence.len());
    Ok(sequence)
}
