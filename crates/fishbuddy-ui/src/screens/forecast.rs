use fishbuddy_core::{AppError, FetchState};
use fishbuddy_weather::ForecastEntry;

use crate::services::{WeatherError, WeatherServiceMessage};

/// One rendered forecast slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRow {
    pub time: String,
    pub temperature: String,
    pub description: String,
}

/// Hourly forecast screen for coordinates handed over by the weather screen
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastScreen {
    latitude: f64,
    longitude: f64,
    state: FetchState<Vec<ForecastEntry>>,
}

impl ForecastScreen {
    pub const TITLE: &'static str = "Hourly Forecast";

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            state: FetchState::Loading,
        }
    }

    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn state(&self) -> &FetchState<Vec<ForecastEntry>> {
        &self.state
    }

    pub fn on_message(&mut self, msg: WeatherServiceMessage) {
        match msg {
            WeatherServiceMessage::ForecastDone(result) => self.on_fetch_done(result),
            WeatherServiceMessage::CurrentDone(_) => {
                tracing::debug!("Forecast screen ignoring current-conditions result");
            }
        }
    }

    pub fn on_fetch_done(&mut self, result: Result<Vec<ForecastEntry>, WeatherError>) {
        let state = std::mem::take(&mut self.state);
        self.state = state.on_done(result, |e| {
            AppError::from(e.clone()).user_message().to_string()
        });
    }

    pub fn rows(&self) -> Vec<ForecastRow> {
        self.state
            .value()
            .map(|entries| {
                entries
                    .iter()
                    .map(|e| ForecastRow {
                        time: e.time_label.clone(),
                        temperature: format!("{}°C", e.temperature),
                        description: e.description.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, temp: i64, desc: &str) -> ForecastEntry {
        ForecastEntry {
            timestamp: String::new(),
            time_label: label.into(),
            temperature: temp,
            description: desc.into(),
        }
    }

    #[test]
    fn ready_renders_rows_in_order() {
        let mut screen = ForecastScreen::new(60.17, 24.94);
        screen.on_message(WeatherServiceMessage::ForecastDone(Ok(vec![
            entry("05.03.2024 09:00", -1, "light snow"),
            entry("05.03.2024 12:00", 2, "overcast clouds"),
        ])));

        let rows = screen.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].time, "05.03.2024 09:00");
        assert_eq!(rows[0].temperature, "-1°C");
        assert_eq!(rows[1].description, "overcast clouds");
    }

    #[test]
    fn failure_message() {
        let mut screen = ForecastScreen::new(60.17, 24.94);
        screen.on_fetch_done(Err(WeatherError::ForecastFailed("500".into())));
        assert_eq!(
            screen.state().error_message(),
            Some("Failed to fetch hourly forecast")
        );
        assert!(screen.rows().is_empty());
    }

    #[test]
    fn ignores_current_conditions() {
        let mut screen = ForecastScreen::new(0.0, 0.0);
        screen.on_message(WeatherServiceMessage::CurrentDone(Err(
            WeatherError::PermissionDenied,
        )));
        assert!(screen.state().is_loading());
    }
}
