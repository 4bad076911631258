use crate::error::{CarSeqError, CsResult};
use crate::objective::ObjectiveOrder;
use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Args, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub eval: EvalParams,
    #[command(flatten)]
    pub sample: SampleParams,
}

/// Overrides applied on top of the instance header.
#[derive(Args, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalParams {
    /// Objective priority, e.g. "high,color,low" or "color,high".
    #[arg(long, value_parser = parse_order)]
    pub objective_order: Option<ObjectiveOrder>,
    /// Longest allowed run of same-colored cars.
    #[arg(long)]
    pub paint_batch: Option<usize>,
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleParams {
    #[arg(long, default_value_t = 64)]
    pub samples: usize,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Random draws per sample before settling for an infeasible one.
    #[arg(long, default_value_t = 1_000)]
    pub max_attempts: usize,
    /// Worker threads; rayon's default pool when unset.
    #[arg(long)]
    pub threads: Option<usize>,
    /// Entries printed from the ranking.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            samples: 64,
            seed: None,
            max_attempts: 1_000,
            threads: None,
            top: 10,
        }
    }
}

fn parse_order(raw: &str) -> Result<ObjectiveOrder, String> {
    raw.parse()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Copies every value given explicitly on the command line over the file values.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(eval.objective_order);
        update_if_present!(eval.paint_batch);

        update_if_present!(sample.samples);
        update_if_present!(sample.seed);
        update_if_present!(sample.max_attempts);
        update_if_present!(sample.threads);
        update_if_present!(sample.top);
    }

    pub fn validate(&self) -> CsResult<()> {
        if self.eval.paint_batch == Some(0) {
            return Err(CarSeqError::Config(
                "paint batch must be at least 1".to_string(),
            ));
        }
        if self.sample.max_attempts == 0 {
            return Err(CarSeqError::Config(
                "max attempts must be at least 1".to_string(),
            ));
        }
        if self.sample.threads == Some(0) {
            return Err(CarSeqError::Config(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
