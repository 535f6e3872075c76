//! Weather service for FishingBuddy
//!
//! Fetches current conditions and the 5-day/3-hour forecast from an
//! OpenWeatherMap-compatible API, with a permission-gated location source.

pub mod fetcher;
pub mod format;
pub mod location;
pub mod lookup;
pub mod provider;
pub mod types;

pub use fetcher::{fetch_current_weather, LocatedWeather};
pub use format::{format_forecast_time, round_half_up};
pub use location::{ConfiguredLocation, LocationService};
pub use lookup::{icon_url, BackgroundAsset, CompassDirection};
pub use provider::{ProviderSettings, WeatherProvider, FORECAST_LIMIT};
pub use types::*;
