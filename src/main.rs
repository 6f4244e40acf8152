//! # Hello Cosmos
//!
//! Getting-started walkthrough for Azure Cosmos DB on the official
//! `azure_data_cosmos` client.
//!
//! ```text
//! hello-cosmos --endpoint https://<account>.documents.azure.com:443/ --key <key>
//! hello-cosmos run --keep-database
//! hello-cosmos cleanup
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hello_cosmos::{console, Cli, Command, GetStartedDemo};

// ─── Entry point ───────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console::failure(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let connection = cli.connection()?;
    let client = connection
        .client()
        .with_context(|| format!("cannot create a client for {}", connection.endpoint))?;
    console::header(&format!("Hello Cosmos ({})", connection.endpoint));

    let settings = cli.settings();
    let database = settings.database.clone();
    let demo = GetStartedDemo::new(client, settings);

    // ─── Commands ──────────────────────────────────────────────────────────

    match cli.command() {
        Command::Run { .. } => {
            demo.run().await.context("walkthrough failed")?;
            console::success("End of demo");
        }
        Command::Cleanup => {
            demo.cleanup()
                .await
                .with_context(|| format!("cannot delete database {}", database))?;
        }
    }
    Ok(())
}
