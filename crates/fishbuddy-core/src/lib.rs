pub mod app;
pub mod config;
pub mod error;
pub mod fetch_state;

pub use app::App;
pub use config::{Config, LocationConfig, LogbookConfig, ValidationResult, WeatherConfig};
pub use error::{AppError, LocationError, StorageError, WeatherError};
pub use fetch_state::FetchState;

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("FishingBuddy core initialized");
    Ok(())
}
