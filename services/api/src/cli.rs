use crate::chat::{run_chat, ChatArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lifecare_triage::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lifecare Triage Assistant",
    about = "Run the Lifecare symptom-triage and information assistant over HTTP or in the terminal",
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
    /// Chat with the assistant interactively in the terminal
    Chat(ChatArgs),
    /// Replay a scripted triage and print the transcript
    Demo(DemoArgs),
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
        Command::Chat(args) => run_chat(args),
        Command::Demo(args) => run_demo(args),
    }
}
