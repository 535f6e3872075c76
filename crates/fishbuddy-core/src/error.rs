//! Centralized error types for the FishingBuddy application.
//!
//! Every variant carries a fixed user-facing message; the inner error
//! keeps the detail for logging.

use thiserror::Error;

/// Top-level application error type.
///
/// Library errors (weather, logbook) are mapped into this type by the UI layer.
/// Use `user_message()` to get a display-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    ///
    /// Fetch failures are not told apart by cause; callers that need the
    /// cause should log the error itself.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Storage(e) => e.user_message(),
            AppError::Location(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
        }
    }
}

/// Local storage errors (logbook persistence).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Stored data is corrupted: {0}")]
    Corruption(String),
}

impl StorageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::ReadFailed(_) => "Unable to read saved logs.",
            StorageError::WriteFailed(_) => "Failed to save logs. Your changes are kept for now.",
            StorageError::Corruption(_) => {
                "Saved logs could not be read. A backup copy was kept."
            }
        }
    }
}

/// Location service errors.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
}

impl LocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::PermissionDenied => "Permission to access location was denied",
        }
    }
}

/// Weather service errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Current weather fetch failed: {0}")]
    CurrentFailed(String),

    #[error("Forecast fetch failed: {0}")]
    ForecastFailed(String),

    #[error("Weather API key not configured")]
    MissingApiKey,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::CurrentFailed(_) => "Failed to fetch weather data",
            WeatherError::ForecastFailed(_) => "Failed to fetch hourly forecast",
            WeatherError::MissingApiKey => "Weather API key is not configured. Check settings.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_non_empty() {
        let errors: Vec<AppError> = vec![
            StorageError::WriteFailed("disk full".into()).into(),
            StorageError::Corruption("eof".into()).into(),
            LocationError::PermissionDenied.into(),
            WeatherError::MissingApiKey.into(),
        ];

        for err in errors {
            assert!(!err.user_message().is_empty(), "empty message for {err}");
        }
    }

    #[test]
    fn test_app_error_conversion() {
        let app_err: AppError = LocationError::PermissionDenied.into();
        assert!(matches!(
            app_err,
            AppError::Location(LocationError::PermissionDenied)
        ));
    }

    #[test]
    fn test_fetch_failures_use_fixed_messages() {
        assert_eq!(
            AppError::Location(LocationError::PermissionDenied).user_message(),
            "Permission to access location was denied"
        );
        assert_eq!(
            AppError::Weather(WeatherError::CurrentFailed("503".into())).user_message(),
            "Failed to fetch weather data"
        );
        assert_eq!(
            AppError::Weather(WeatherError::ForecastFailed("timeout".into())).user_message(),
            "Failed to fetch hourly forecast"
        );
    }
}
