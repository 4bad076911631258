use crate::reports;
use carseq::api;
use carseq::config::Config;
use carseq::error::CsResult;
use carseq::instance::Instance;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Solution file of original-plan indices; the plan order when omitted.
    #[arg(short, long)]
    pub solution: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: EvaluateArgs, instance: &Arc<Instance>) -> CsResult<i32> {
    let sequence = args.solution.as_ref().map(api::load_sequence).transpose()?;
    let report = api::evaluate_sequence(instance, sequence)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_evaluation(&report);
    }
    Ok(0)
}
