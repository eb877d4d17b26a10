mod app;
mod catalog;
mod config;
mod document;
mod markdown;
mod pipeline;
mod retry;
mod serper;
mod together;

pub const USER_AGENT: &str = concat!("dicproblemas/", env!("CARGO_PKG_VERSION"));

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dicproblemas=warn")),
        )
        .init();

    let cli = app::Cli::parse();
    app::run(cli).await
}
