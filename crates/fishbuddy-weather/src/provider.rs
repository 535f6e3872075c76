//! OpenWeatherMap client: current conditions and 5-day/3-hour forecast.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::format::{format_forecast_time, round_half_up};
use crate::types::{ForecastEntry, Location, WeatherError, WeatherSnapshot};

/// Number of forecast slots kept for display
pub const FORECAST_LIMIT: usize = 12;

const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";

/// Connection settings for [`WeatherProvider`]
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub base_url: String,
    pub api_key: String,
    pub units: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    main: MainBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    #[serde(default)]
    wind: WindBlock,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    #[serde(default)]
    humidity: f64,
    #[serde(default)]
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
    icon: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WindBlock {
    #[serde(default)]
    speed: f64,
    #[serde(default)]
    deg: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt_txt: String,
    main: ForecastMain,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
}

impl TryFrom<CurrentResponse> for WeatherSnapshot {
    type Error = WeatherError;

    fn try_from(resp: CurrentResponse) -> Result<Self, Self::Error> {
        let condition = resp
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse("response has no weather condition".into()))?;

        Ok(WeatherSnapshot {
            temperature: resp.main.temp,
            description: condition.description,
            category: condition.main,
            icon: condition.icon,
            location_name: resp.name,
            wind_speed: resp.wind.speed,
            wind_deg: resp.wind.deg,
            humidity: resp.main.humidity,
            pressure: resp.main.pressure,
        })
    }
}

impl From<ForecastItem> for ForecastEntry {
    fn from(item: ForecastItem) -> Self {
        let description = item
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .unwrap_or_default();

        ForecastEntry {
            time_label: format_forecast_time(&item.dt_txt),
            timestamp: item.dt_txt,
            temperature: round_half_up(item.main.temp),
            description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
    units: String,
}

impl WeatherProvider {
    pub fn new(settings: ProviderSettings) -> Result<Self, WeatherError> {
        if settings.api_key.trim().is_empty() {
            return Err(WeatherError::NotConfigured);
        }

        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
            units: settings.units,
        })
    }

    /// Current conditions at a location. No retry: any failure is returned as-is.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_current(&self, location: &Location) -> Result<WeatherSnapshot, WeatherError> {
        let resp: CurrentResponse = self
            .get_json(CURRENT_PATH, location.latitude, location.longitude)
            .await?;
        WeatherSnapshot::try_from(resp)
    }

    /// First [`FORECAST_LIMIT`] forecast slots, in provider order.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastEntry>, WeatherError> {
        let resp: ForecastResponse = self.get_json(FORECAST_PATH, latitude, longitude).await?;
        tracing::debug!("Forecast feed returned {} entries", resp.list.len());

        Ok(resp
            .list
            .into_iter()
            .take(FORECAST_LIMIT)
            .map(ForecastEntry::from)
            .collect())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<T, WeatherError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(
            "GET {}?lat={}&lon={}&units={}&appid=<redacted>",
            url,
            latitude,
            longitude,
            self.units
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("units", self.units.clone()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather provider returned {} for {}", status, path);
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))
    }
}
