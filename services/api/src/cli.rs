use crate::demo::{run_demo, run_intake_recommend, run_status, DemoArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use petition_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "O-1A Petition Assistant",
    about = "Assemble, score, and review O-1A evidence from the command line",
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
    /// Work with background intake data
    Intake {
        #[command(subcommand)]
        command: IntakeCommand,
    },
    /// Print progress and review status of the stored application
    Status,
    /// Run an in-memory walkthrough from intake to reviewer decisions
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum IntakeCommand {
    /// Score an intake JSON file against the eight criteria
    Recommend(RecommendArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Intake {
            command: IntakeCommand::Recommend(args),
        } => run_intake_recommend(args),
        Command::Status => run_status(),
        Command::Demo(args) => run_demo(args),
    }
}
