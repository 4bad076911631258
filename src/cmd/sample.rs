use crate::reports;
use carseq::candidates;
use carseq::config::Config;
use carseq::error::CsResult;
use carseq::instance::Instance;
use clap::Args;
use std::sync::Arc;
use std::time::Instant;

#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: SampleArgs, config: &Config, instance: &Arc<Instance>) -> CsResult<i32> {
    let params = &config.sample;
    let start = Instant::now();
    let ranked = candidates::sample_and_rank(instance, params)?;
    let top = &ranked[..params.top.min(ranked.len())];

    if args.json {
        println!("{}", serde_json::to_string_pretty(top)?);
    } else {
        reports::print_ranking(top, instance.objective_order());
        println!(
            "Ranked {} candidates in {:.2?}",
            ranked.len(),
            start.elapsed()
        );
    }
    Ok(0)
}
