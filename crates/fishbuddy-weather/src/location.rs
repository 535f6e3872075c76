//! Permission-gated location source.

use std::future::Future;

use crate::types::{Accuracy, Location, LocationError, PermissionStatus};

/// A device location service: ask for permission, then read a position.
pub trait LocationService: Send + Sync {
    /// Request foreground location permission.
    fn request_permission(&self) -> impl Future<Output = PermissionStatus> + Send;

    /// Best-effort current position at the requested accuracy.
    fn current_location(
        &self,
        accuracy: Accuracy,
    ) -> impl Future<Output = Result<Location, LocationError>> + Send;
}

/// Location taken from configuration.
///
/// The permission grant is a setting; a granted service without
/// coordinates reports `ServiceUnavailable`.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLocation {
    permission_granted: bool,
    coordinates: Option<(f64, f64)>,
}

impl ConfiguredLocation {
    pub fn new(permission_granted: bool, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        let coordinates = latitude.zip(longitude);
        Self {
            permission_granted,
            coordinates,
        }
    }

    /// A service that always grants and returns the given point.
    pub fn fixed(latitude: f64, longitude: f64) -> Self {
        Self::new(true, Some(latitude), Some(longitude))
    }

    /// A service whose permission prompt is always refused.
    pub fn denied() -> Self {
        Self::default()
    }
}

impl LocationService for ConfiguredLocation {
    async fn request_permission(&self) -> PermissionStatus {
        if self.permission_granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    async fn current_location(&self, accuracy: Accuracy) -> Result<Location, LocationError> {
        if !self.permission_granted {
            return Err(LocationError::PermissionDenied);
        }

        let (latitude, longitude) = self.coordinates.ok_or(LocationError::ServiceUnavailable)?;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        tracing::debug!("Configured location at {:?} accuracy", accuracy);
        Ok(Location {
            latitude,
            longitude,
            // Configured points are exact regardless of tier
            accuracy_meters: Some(0.0),
        })
    }
}
