//! Screen controllers for FishingBuddy.
//!
//! Each screen owns its state as named fields; every user action is a
//! method that moves that state. Rendering is left to the front end.

pub mod error_mapping;
pub mod screens;
pub mod services;

pub use screens::{
    ForecastRow, ForecastScreen, LogCard, LogbookScreen, Tip, TipsScreen, WeatherScreen,
    WeatherView,
};
pub use services::{WeatherError, WeatherServiceMessage};
