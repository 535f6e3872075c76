mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize core
    fishbuddy_core::init()?;

    // Create and initialize application
    let mut app = fishbuddy_core::App::new(cli.config.as_deref())?;
    app.initialize()?;

    tracing::info!("FishingBuddy started");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("fishbuddy-tokio")
        .build()
        .context("Failed to create tokio runtime")?;

    let result = commands::run(&app, runtime.handle(), cli.command);

    // Graceful shutdown
    app.shutdown()?;

    result
}
