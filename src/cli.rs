//! The `run-agent` command line client.
//!
//! It drives the same handler as the web form, reading the files from disk instead of file pickers.

use crate::{ClientConfig, HttpTransport, SelectedFile, Status, run_agent};
use clap::{Args, Parser, Subcommand};
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

/// The environment variable holding the tracing filter, e.g. `RUN_AGENT_LOG=debug`.
pub const LOG_ENV: &str = "RUN_AGENT_LOG";

/// Merge a parameter table with the tables of a PDF using the run-agent service.
#[derive(Parser, Debug)]
#[clap(name = "run-agent", version)]
pub struct Cli {
    #[clap(subcommand)]
    pub action: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a parameter table and a PDF and print the agent's answer.
    Run(Run),

    /// Check whether the server is up.
    Ping(Ping),
}

#[derive(Args, Debug, Default)]
pub struct ServerArgs {
    /// Base URL of the server. Defaults to $RUN_AGENT_SERVER_URL, then http://localhost:8000.
    #[clap(long)]
    pub server: Option<String>,
}

impl ServerArgs {
    fn transport(&self) -> crate::Result<HttpTransport> {
        let config = match &self.server {
            Some(url) => ClientConfig::new(url)?,
            None => ClientConfig::from_env(),
        };

        Ok(HttpTransport::new(&config))
    }
}

#[derive(Args, Debug)]
pub struct Run {
    /// Path to the parameter table (.csv or .json).
    #[clap(long)]
    pub params: PathBuf,

    /// Path to the PDF document.
    #[clap(long)]
    pub pdf: PathBuf,

    /// Optional join key/column name.
    #[clap(long, default_value = "")]
    pub key: String,

    /// Write the response here instead of stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,

    #[clap(flatten)]
    pub server: ServerArgs,
}

#[derive(Args, Debug)]
pub struct Ping {
    #[clap(flatten)]
    pub server: ServerArgs,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let ok = match self.action {
            Commands::Run(opts) => !opts.run().await?.is_failure(),
            Commands::Ping(opts) => opts.ping().await?,
        };

        Ok(match ok {
            true => ExitCode::SUCCESS,
            false => ExitCode::FAILURE,
        })
    }
}

impl Run {
    pub async fn run(self) -> anyhow::Result<Status> {
        let transport = self.server.transport()?;
        let params_file = SelectedFile::from_path(&self.params)?;
        let pdf_file = SelectedFile::from_path(&self.pdf)?;

        let status = run_agent(
            &transport,
            Some(params_file),
            Some(pdf_file),
            &self.key,
            |status| {
                if *status == Status::Running {
                    tracing::info!("{status}");
                }
            },
        )
        .await;

        match &self.output {
            Some(path) => {
                tokio::fs::write(path, format!("{status}\n")).await?;
                tracing::info!("Response written to {}", path.display());
            }
            None => println!("{status}"),
        }

        Ok(status)
    }
}

impl Ping {
    /// Returns whether the server answered `{"status":"ok"}`.
    pub async fn ping(self) -> anyhow::Result<bool> {
        let transport = self.server.transport()?;

        let healthy = match transport.ping().await {
            Ok(true) => {
                println!("Server online");
                true
            }
            Ok(false) => {
                println!("Server offline");
                false
            }
            Err(err) => {
                println!("Server offline: {err}");
                false
            }
        };

        Ok(healthy)
    }
}

/// Log to stderr so stdout only carries the response.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
