use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod cli;

use cli::Cli;
use cloudvm::pipeline::{Pipeline, RunError};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("cloudvm={log_level},warn").into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("cloudvm v{} starting", env!("CARGO_PKG_VERSION"));

    let mut pipeline = Pipeline::new(cli.into_options());
    match pipeline.run().await {
        Ok(summary) => {
            for report in &summary.reports {
                info!(
                    "{}: {} command(s) processed",
                    report.provider,
                    report.outcomes.len()
                );
            }
            info!("✓ Operation completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("✗ {:#}", e);
            match e.downcast_ref::<RunError>() {
                Some(RunError::FileIdentity { .. }) => {
                    eprintln!("Usage: cloudvm Azure.conf GCP.conf (run from the directory holding both files)");
                }
                Some(RunError::Validation { .. }) => {
                    eprintln!(
                        "Please include the minimum required variables and the specifications for their values, for VM creation, in the config files and try again."
                    );
                }
                None => {}
            }
            std::process::exit(1);
        }
    }
}
