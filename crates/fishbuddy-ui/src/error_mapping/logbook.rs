use fishbuddy_core::{AppError, StorageError};
use fishbuddy_logbook::{LoadState, StorageError as LibStorageError};

/// Classify a logbook storage failure
pub fn storage_failure(e: LibStorageError) -> AppError {
    match e {
        LibStorageError::Read { .. } => AppError::Storage(StorageError::ReadFailed(e.to_string())),
        LibStorageError::Write { .. }
        | LibStorageError::Serialize(_)
        | LibStorageError::InvalidKey(_) => {
            AppError::Storage(StorageError::WriteFailed(e.to_string()))
        }
    }
}

/// Failure carried by a logbook hydration, if any
pub fn load_failure(state: &LoadState) -> Option<AppError> {
    match state {
        LoadState::Failed(reason) => Some(AppError::Storage(StorageError::Corruption(
            reason.clone(),
        ))),
        LoadState::NotLoaded | LoadState::Loaded => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_load_maps_to_corruption() {
        let err = load_failure(&LoadState::Failed("expected value".into())).unwrap();
        assert!(matches!(err, AppError::Storage(StorageError::Corruption(_))));
        assert!(load_failure(&LoadState::Loaded).is_none());
    }

    #[test]
    fn invalid_key_maps_to_write_failure() {
        let err = storage_failure(LibStorageError::InvalidKey("../x".into()));
        assert!(matches!(err, AppError::Storage(StorageError::WriteFailed(_))));
    }

    #[test]
    fn read_error_maps_to_read_failure() {
        let err = storage_failure(LibStorageError::Read {
            key: "fishingLogs".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert!(matches!(err, AppError::Storage(StorageError::ReadFailed(_))));
        assert_eq!(err.user_message(), "Unable to read saved logs.");
    }
}
