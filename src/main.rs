use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use gradeform::config::Config;
use gradeform::error::GfResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;
mod terminal;

#[derive(Parser, Debug)]
#[command(author, version, about = "Grade prediction form client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; flags given on the command line still win
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run values through the input mask and validator offline
    Check(cmd::check::CheckArgs),
    /// Fill the form and request one prediction
    Predict(cmd::predict::PredictArgs),
    /// Request one prediction per CSV row
    Batch(cmd::batch::BatchArgs),
    /// Show service health, expected fields and model details
    Health(cmd::health::HealthArgs),
}

impl Commands {
    fn config(&self) -> &Config {
        match self {
            Commands::Check(args) => &args.config,
            Commands::Predict(args) => &args.config,
            Commands::Batch(args) => &args.config,
            Commands::Health(args) => &args.config,
        }
    }
}

#[tokio::main]
async fn main() {
    // 1. Raw matches tell user-typed flags apart from defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    // 2. File config (if any) with explicit flags merged on top
    let config = resolve_config(&cli, &matches).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    // 3. Execute
    let result = match cli.command {
        Commands::Check(args) => cmd::check::run(args, &config),
        Commands::Predict(args) => cmd::predict::run(args, &config).await,
        Commands::Batch(args) => cmd::batch::run(args, &config).await,
        Commands::Health(args) => cmd::health::run(args, &config).await,
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

fn resolve_config(cli: &Cli, matches: &ArgMatches) -> GfResult<Config> {
    let cli_config = cli.command.config();

    let Some(path) = &cli.config else {
        cli_config.check()?;
        return Ok(cli_config.clone());
    };

    info!("📂 Loading config: {}", path);
    let mut config = Config::load_from_file(path)?;
    if let Some((_, sub_matches)) = matches.subcommand() {
        config.merge_from_cli(cli_config, sub_matches);
    }
    config.check()?;
    Ok(config)
}
