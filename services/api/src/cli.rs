use crate::demo::{run_demo, run_journey_status, DemoArgs, JourneyStatusArgs};
use crate::server;
use career_ai::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Readiness Orchestrator",
    about = "Run and demo the student career readiness dashboard API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Derive a journey directly from the command line
    Journey {
        #[command(subcommand)]
        command: JourneyCommand,
    },
    /// Walk three sample students through the full journey derivation
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum JourneyCommand {
    /// Compute stage, completion, and next actions for one snapshot or a roster
    Status(JourneyStatusArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Preload three sample students for manual exploration
    #[arg(long)]
    pub(crate) demo_data: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Journey {
            command: JourneyCommand::Status(args),
        } => run_journey_status(args),
        Command::Demo(args) => run_demo(args),
    }
}
