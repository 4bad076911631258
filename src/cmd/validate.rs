use crate::reports;
use carseq::api;
use carseq::config::Config;
use carseq::error::CsResult;
use carseq::instance::Instance;
use carseq::validator;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub solution: Option<String>,
}

/// Exit code 1 when the sequence overruns the paint batch limit.
pub fn run(args: ValidateArgs, instance: &Arc<Instance>) -> CsResult<i32> {
    let sequence = match &args.solution {
        Some(path) => api::load_sequence(path)?,
        None => instance.identity_sequence(),
    };
    let feasibility = validator::validate_full(instance, &sequence)?;
    reports::print_feasibility(&feasibility, instance.max_paint_batch());
    Ok(if feasibility.is_feasible() { 0 } else { 1 })
}
