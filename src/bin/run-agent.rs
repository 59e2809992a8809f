use clap::Parser;
use run_agent_client::cli::{Cli, init_tracing};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    Cli::parse().run().await
}
