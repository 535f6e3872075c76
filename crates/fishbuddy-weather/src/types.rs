use serde::{Deserialize, Serialize};

use crate::format::round_half_up;
use crate::lookup::{icon_url, BackgroundAsset, CompassDirection};

/// Accuracy tier requested from the location service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    Lowest,
    Low,
    Balanced,
    High,
    #[default]
    Highest,
}

/// Outcome of a location permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Geographic location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_meters: Option<f64>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_meters: None,
        }
    }
}

/// Current conditions as returned by the provider, held for the lifetime of a screen.
///
/// Temperature keeps full precision; rounding happens in [`WeatherSnapshot::display_temperature`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Degrees Celsius
    pub temperature: f64,
    /// Free-text condition, e.g. "light rain"
    pub description: String,
    /// Coarse provider category, e.g. "Rain"
    pub category: String,
    /// Provider icon code, e.g. "10d"
    pub icon: Option<String>,
    pub location_name: String,
    /// Metres per second
    pub wind_speed: f64,
    /// Degrees, meteorological convention
    pub wind_deg: f64,
    /// Percent
    pub humidity: f64,
    /// hPa
    pub pressure: f64,
}

impl WeatherSnapshot {
    pub fn display_temperature(&self) -> i64 {
        round_half_up(self.temperature)
    }

    pub fn wind_direction(&self) -> Option<CompassDirection> {
        CompassDirection::from_degrees(self.wind_deg)
    }

    pub fn background(&self) -> BackgroundAsset {
        BackgroundAsset::from_category(&self.category)
    }

    pub fn icon_url(&self) -> Option<String> {
        self.icon.as_deref().filter(|i| !i.is_empty()).map(icon_url)
    }
}

/// One 3-hour slot of the forecast feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Timestamp exactly as the provider sent it
    pub timestamp: String,
    /// `DD.MM.YYYY HH:mm`
    pub time_label: String,
    /// Rounded degrees Celsius
    pub temperature: i64,
    pub description: String,
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Invalid coordinates: {latitude}, {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Weather API key not configured")]
    NotConfigured,
}

impl WeatherError {
    /// True when the failure happened before any network call.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, WeatherError::Location(LocationError::PermissionDenied))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: 12.5,
            description: "light rain".into(),
            category: "Rain".into(),
            icon: Some("10d".into()),
            location_name: "Tampere".into(),
            wind_speed: 4.1,
            wind_deg: 200.0,
            humidity: 81.0,
            pressure: 1012.0,
        }
    }

    #[test]
    fn test_display_temperature_rounds_half_up() {
        assert_eq!(snapshot().display_temperature(), 13);
        let cold = WeatherSnapshot {
            temperature: -2.5,
            ..snapshot()
        };
        assert_eq!(cold.display_temperature(), -2);
    }

    #[test]
    fn test_temperature_keeps_precision() {
        assert_eq!(snapshot().temperature, 12.5);
    }

    #[test]
    fn test_presentation_lookups() {
        let s = snapshot();
        assert_eq!(s.wind_direction(), Some(CompassDirection::South));
        assert_eq!(s.background(), BackgroundAsset::Rain);
        assert_eq!(
            s.icon_url().as_deref(),
            Some("https://openweathermap.org/img/wn/10d@2x.png")
        );
    }

    #[test]
    fn test_missing_icon_has_no_url() {
        let s = WeatherSnapshot {
            icon: Some(String::new()),
            ..snapshot()
        };
        assert!(s.icon_url().is_none());
    }

    #[test]
    fn test_permission_denied_detection() {
        assert!(WeatherError::from(LocationError::PermissionDenied).is_permission_denied());
        assert!(!WeatherError::Parse("x".into()).is_permission_denied());
    }
}
