//! `mazer`: solve a maze file or serve the solver over HTTP.
//!
//! Run: cargo run -- solve mazes/maze1.txt
//!      cargo run -- serve --port 5000

use clap::Parser;
use mazer::config::{Cli, Command, default_log_filter};
use mazer::{ServerConfig, run_solve, service};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_log_filter(cli.verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Solve(args) => run_solve(&args, std::io::stdout().lock()),
        Command::Serve(args) => service::serve(ServerConfig::from(&args)).await,
    }
}
