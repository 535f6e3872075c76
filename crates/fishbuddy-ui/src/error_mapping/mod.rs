//! Conversions from service and storage errors into `fishbuddy_core::AppError`.

mod logbook;
mod weather;

pub use logbook::{load_failure, storage_failure};
