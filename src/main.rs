use carseq::config::Config;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/instance.txt")]
    instance: String,

    /// JSON config file; explicit command-line flags take precedence.
    #[arg(global = true, long)]
    config: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the objective vector of a sequence.
    Evaluate(cmd::evaluate::EvaluateArgs),
    /// Check a sequence against the hard constraints.
    Validate(cmd::validate::ValidateArgs),
    /// Rank random feasible reorderings of the plan.
    Sample(cmd::sample::SampleArgs),
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Raw matches tell user input apart from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let (cli_config, name) = match &cli.command {
        Commands::Evaluate(args) => (&args.config, "evaluate"),
        Commands::Validate(args) => (&args.config, "validate"),
        Commands::Sample(args) => (&args.config, "sample"),
    };
    let sub_matches = matches.subcommand_matches(name).unwrap_or(&matches);

    let config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from_file(path).unwrap_or_else(|e| {
                eprintln!("Failed to load config '{}': {}", path, e);
                process::exit(2);
            });
            config.merge_from_cli(cli_config, sub_matches);
            config
        }
        None => cli_config.clone(),
    };
    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        process::exit(2);
    }

    let instance = carseq::api::load_instance(&cli.instance, &config.eval).unwrap_or_else(|e| {
        eprintln!("Failed to load instance '{}': {}", cli.instance, e);
        process::exit(2);
    });

    let result = match cli.command {
        Commands::Evaluate(args) => cmd::evaluate::run(args, &instance),
        Commands::Validate(args) => cmd::validate::run(args, &instance),
        Commands::Sample(args) => cmd::sample::run(args, &config, &instance),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    }
}
