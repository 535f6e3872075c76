//! Weather backend: async weather fetching.
//! All network work runs on the runtime; results come back over mpsc.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use fishbuddy_core::{LocationConfig, WeatherConfig};
use fishbuddy_weather::{
    ConfiguredLocation, ForecastEntry, LocatedWeather, LocationError, LocationService,
    ProviderSettings, WeatherProvider,
};

/// Error type for weather operations
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherError {
    PermissionDenied,
    CurrentFailed(String),
    ForecastFailed(String),
    NotConfigured,
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::PermissionDenied => write!(f, "Location error: permission denied"),
            WeatherError::CurrentFailed(s) => write!(f, "Weather error: {}", s),
            WeatherError::ForecastFailed(s) => write!(f, "Forecast error: {}", s),
            WeatherError::NotConfigured => write!(f, "Weather service not configured"),
        }
    }
}

impl std::error::Error for WeatherError {}

impl WeatherError {
    /// Classify a failure of the current-conditions flow.
    pub fn from_current(e: fishbuddy_weather::WeatherError) -> Self {
        match e {
            fishbuddy_weather::WeatherError::Location(LocationError::PermissionDenied) => {
                WeatherError::PermissionDenied
            }
            fishbuddy_weather::WeatherError::NotConfigured => WeatherError::NotConfigured,
            other => WeatherError::CurrentFailed(other.to_string()),
        }
    }

    /// Classify a failure of the forecast flow.
    pub fn from_forecast(e: fishbuddy_weather::WeatherError) -> Self {
        match e {
            fishbuddy_weather::WeatherError::NotConfigured => WeatherError::NotConfigured,
            other => WeatherError::ForecastFailed(other.to_string()),
        }
    }
}

/// Messages sent from async operations back to the UI thread
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of fetching current conditions
    CurrentDone(Result<LocatedWeather, WeatherError>),
    /// Result of fetching the hourly forecast
    ForecastDone(Result<Vec<ForecastEntry>, WeatherError>),
}

/// Build the provider from config. The credential comes from config/env only.
pub fn build_provider(config: &WeatherConfig) -> Result<WeatherProvider, WeatherError> {
    if !config.is_configured() {
        return Err(WeatherError::NotConfigured);
    }
    WeatherProvider::new(ProviderSettings {
        base_url: config.api_base_url.clone(),
        api_key: config.api_key.clone(),
        units: config.units.clone(),
        timeout: Duration::from_secs(config.timeout_secs),
    })
    .map_err(WeatherError::from_current)
}

/// Location service described by config
pub fn location_from_config(config: &LocationConfig) -> ConfiguredLocation {
    ConfiguredLocation::new(config.permission_granted, config.latitude, config.longitude)
}

/// Request current conditions asynchronously.
/// Sends `CurrentDone` on the channel when complete.
pub fn request_current<L>(
    tx: &Sender<WeatherServiceMessage>,
    runtime: &tokio::runtime::Handle,
    locator: Arc<L>,
    provider: Arc<WeatherProvider>,
) where
    L: LocationService + 'static,
{
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = fishbuddy_weather::fetch_current_weather(locator.as_ref(), &provider)
            .await
            .map_err(|e| {
                tracing::warn!("Current weather fetch failed: {}", e);
                WeatherError::from_current(e)
            });
        let _ = tx.send(WeatherServiceMessage::CurrentDone(result));
    });
}

/// Request the hourly forecast for explicit coordinates.
/// Sends `ForecastDone` on the channel when complete.
pub fn request_forecast(
    tx: &Sender<WeatherServiceMessage>,
    runtime: &tokio::runtime::Handle,
    provider: Arc<WeatherProvider>,
    latitude: f64,
    longitude: f64,
) {
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = provider
            .fetch_forecast(latitude, longitude)
            .await
            .map_err(|e| {
                tracing::warn!("Forecast fetch failed: {}", e);
                WeatherError::from_forecast(e)
            });
        let _ = tx.send(WeatherServiceMessage::ForecastDone(result));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_error_display() {
        assert!(format!("{}", WeatherError::CurrentFailed("timeout".into())).contains("Weather"));
        assert!(format!("{}", WeatherError::PermissionDenied).contains("Location"));
        assert!(format!("{}", WeatherError::NotConfigured).contains("not configured"));
    }

    #[test]
    fn classify_current_failures() {
        assert_eq!(
            WeatherError::from_current(LocationError::PermissionDenied.into()),
            WeatherError::PermissionDenied
        );
        assert!(matches!(
            WeatherError::from_current(LocationError::ServiceUnavailable.into()),
            WeatherError::CurrentFailed(_)
        ));
        assert!(matches!(
            WeatherError::from_forecast(fishbuddy_weather::WeatherError::Parse("x".into())),
            WeatherError::ForecastFailed(_)
        ));
    }

    #[test]
    fn build_provider_requires_key() {
        let config = WeatherConfig::default();
        assert_eq!(build_provider(&config).err(), Some(WeatherError::NotConfigured));
    }

    #[test]
    fn location_from_config_respects_grant() {
        let config = LocationConfig {
            permission_granted: false,
            latitude: Some(60.0),
            longitude: Some(24.0),
        };
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let status = rt.block_on(location_from_config(&config).request_permission());
        assert_eq!(status, fishbuddy_weather::PermissionStatus::Denied);
    }
}
