//! Screen fetch lifecycle (weather, hourly forecast).
//!
//! A fetch is issued once on screen activation and runs to completion;
//! the only way back to `Loading` is re-entering the screen.

/// Lifecycle of a one-shot fetch owned by a screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    /// True while the fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Loaded value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// User-visible failure text, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// State after the fetch completes. Only a `Loading` state accepts a result.
    pub fn on_done<E>(self, result: Result<T, E>, message: impl FnOnce(&E) -> String) -> Self {
        match self {
            FetchState::Loading => match result {
                Ok(value) => FetchState::Ready(value),
                Err(e) => FetchState::Failed(message(&e)),
            },
            done => done,
        }
    }
}
