use fishbuddy_core::{AppError, FetchState};
use fishbuddy_weather::LocatedWeather;

use crate::services::{WeatherError, WeatherServiceMessage};

/// Display-ready strings for the current conditions
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub temperature: String,
    pub condition: String,
    pub location: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub humidity: String,
    pub pressure: String,
    pub background: &'static str,
    pub icon_url: Option<String>,
}

/// Weather screen: one fetch per activation, no retry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherScreen {
    state: FetchState<LocatedWeather>,
}

impl WeatherScreen {
    pub const TITLE: &'static str = "Weather Information";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<LocatedWeather> {
        &self.state
    }

    /// Apply a service message. Forecast messages belong to another screen.
    pub fn on_message(&mut self, msg: WeatherServiceMessage) {
        match msg {
            WeatherServiceMessage::CurrentDone(result) => self.on_fetch_done(result),
            WeatherServiceMessage::ForecastDone(_) => {
                tracing::debug!("Weather screen ignoring forecast result");
            }
        }
    }

    pub fn on_fetch_done(&mut self, result: Result<LocatedWeather, WeatherError>) {
        let state = std::mem::take(&mut self.state);
        self.state = state.on_done(result, |e| {
            AppError::from(e.clone()).user_message().to_string()
        });
    }

    pub fn view(&self) -> Option<WeatherView> {
        let s = &self.state.value()?.snapshot;
        let wind_label = s
            .wind_direction()
            .map(|d| d.label())
            .unwrap_or("Unknown");

        Some(WeatherView {
            temperature: format!("{}°C", s.display_temperature()),
            condition: s.description.clone(),
            location: s.location_name.clone(),
            wind_speed: format!("{} m/s", s.wind_speed),
            wind_direction: format!("{}° ({})", s.wind_deg, wind_label),
            humidity: format!("{}%", s.humidity),
            pressure: format!("{} hPa", s.pressure),
            background: s.background().file_name(),
            icon_url: s.icon_url(),
        })
    }

    /// Coordinates to open the hourly forecast with, once conditions are shown
    pub fn forecast_target(&self) -> Option<(f64, f64)> {
        self.state
            .value()
            .map(|w| (w.location.latitude, w.location.longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fishbuddy_weather::{Location, WeatherSnapshot};

    fn located() -> LocatedWeather {
        LocatedWeather {
            location: Location::new(60.45, 22.27),
            snapshot: WeatherSnapshot {
                temperature: 18.6,
                description: "clear sky".into(),
                category: "Clear".into(),
                icon: Some("01d".into()),
                location_name: "Turku".into(),
                wind_speed: 3.6,
                wind_deg: 22.5,
                humidity: 54.0,
                pressure: 1018.0,
            },
        }
    }

    #[test]
    fn loading_has_no_view() {
        let screen = WeatherScreen::new();
        assert!(screen.state().is_loading());
        assert!(screen.view().is_none());
        assert!(screen.forecast_target().is_none());
    }

    #[test]
    fn ready_renders_view() {
        let mut screen = WeatherScreen::new();
        screen.on_fetch_done(Ok(located()));

        let view = screen.view().unwrap();
        assert_eq!(view.temperature, "19°C");
        assert_eq!(view.condition, "clear sky");
        assert_eq!(view.location, "Turku");
        assert_eq!(view.wind_speed, "3.6 m/s");
        assert_eq!(view.wind_direction, "22.5° (North)");
        assert_eq!(view.humidity, "54%");
        assert_eq!(view.pressure, "1018 hPa");
        assert_eq!(view.background, "sunny.gif");
        assert_eq!(screen.forecast_target(), Some((60.45, 22.27)));
    }

    #[test]
    fn permission_denied_message() {
        let mut screen = WeatherScreen::new();
        screen.on_message(WeatherServiceMessage::CurrentDone(Err(
            WeatherError::PermissionDenied,
        )));
        assert_eq!(
            screen.state().error_message(),
            Some("Permission to access location was denied")
        );
        assert!(screen.forecast_target().is_none());
    }

    #[test]
    fn fetch_failure_message() {
        let mut screen = WeatherScreen::new();
        screen.on_fetch_done(Err(WeatherError::CurrentFailed("timeout".into())));
        assert_eq!(
            screen.state().error_message(),
            Some("Failed to fetch weather data")
        );
    }
}
