use crate::commands::{run_catalog, run_evaluate, CatalogArgs, EvaluateArgs};
use crate::demo::{run_demo, DemoArgs};
use clap::{Parser, Subcommand};
use supplier_qualification::config::AppConfig;
use supplier_qualification::error::AppError;
use supplier_qualification::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Supplier Qualification Console",
    about = "Score and classify supplier qualification evaluations from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the scoring criteria available for a candidate type
    Catalog(CatalogArgs),
    /// Rebuild an evaluation from persisted answers and print the normalized payload
    Evaluate(EvaluateArgs),
    /// Walk through an evaluation and its edit flow (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "supplier console configured");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Catalog(args) => run_catalog(args, &config),
        Command::Evaluate(args) => run_evaluate(args, &config),
        Command::Demo(args) => run_demo(args),
    }
}
