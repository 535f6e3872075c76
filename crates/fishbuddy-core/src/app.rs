use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::config::ValidationResult;
use crate::Config;

/// Main application state and lifecycle manager
#[derive(Debug)]
pub struct App {
    config: Arc<Config>,
    validation: ValidationResult,
}

impl App {
    /// Create a new application instance, loading config from `config_path` or the default location
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let (config, validation) = Config::load_validated(config_path)?;
        Ok(Self::with_config(config, validation))
    }

    /// Create an application instance around an already loaded config
    pub fn with_config(config: Config, validation: ValidationResult) -> Self {
        Self {
            config: Arc::new(config),
            validation,
        }
    }

    /// Prepare on-disk state (data directory)
    pub fn initialize(&mut self) -> Result<()> {
        let data_dir = self.config.logbook_data_dir();
        tracing::info!("Initializing application, data dir {}", data_dir.display());

        std::fs::create_dir_all(&data_dir)?;

        if !self.validation.warnings.is_empty() {
            tracing::debug!(
                "Running with {} config warnings",
                self.validation.warnings.len()
            );
        }

        tracing::info!("Application initialized successfully");
        Ok(())
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared handle to the config
    pub fn config_arc(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }

    /// Validation warnings gathered at load time
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut app = App::new(Some(&path)).unwrap();
        app.initialize().unwrap();

        assert!(dir.path().join("data").is_dir());
        assert_eq!(app.config().logbook.storage_key, "fishingLogs");
        app.shutdown().unwrap();
    }
}
