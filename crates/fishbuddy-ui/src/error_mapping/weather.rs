use crate::services::weather_service::WeatherError as UiWeatherError;
use fishbuddy_core::{AppError, LocationError, WeatherError};

impl From<UiWeatherError> for AppError {
    fn from(e: UiWeatherError) -> Self {
        match e {
            UiWeatherError::PermissionDenied => AppError::Location(LocationError::PermissionDenied),
            UiWeatherError::CurrentFailed(s) => AppError::Weather(WeatherError::CurrentFailed(s)),
            UiWeatherError::ForecastFailed(s) => AppError::Weather(WeatherError::ForecastFailed(s)),
            UiWeatherError::NotConfigured => AppError::Weather(WeatherError::MissingApiKey),
        }
    }
}
