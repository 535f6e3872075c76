use serde::{Deserialize, Serialize};

use crate::location::LocationService;
use crate::provider::WeatherProvider;
use crate::types::{Accuracy, Location, LocationError, PermissionStatus, WeatherError, WeatherSnapshot};

/// Current conditions together with the position they were fetched for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedWeather {
    pub location: Location,
    pub snapshot: WeatherSnapshot,
}

/// Permission -> position -> one GET of current conditions.
///
/// A refused permission returns before any network call is made.
pub async fn fetch_current_weather<L: LocationService>(
    locator: &L,
    provider: &WeatherProvider,
) -> Result<LocatedWeather, WeatherError> {
    if locator.request_permission().await != PermissionStatus::Granted {
        tracing::info!("Location permission denied");
        return Err(LocationError::PermissionDenied.into());
    }

    let location = locator.current_location(Accuracy::Highest).await?;
    tracing::info!("Got location: {}, {}", location.latitude, location.longitude);

    let snapshot = provider.fetch_current(&location).await?;
    Ok(LocatedWeather { location, snapshot })
}
