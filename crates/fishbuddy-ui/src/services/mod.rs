pub mod weather_service;

pub use weather_service::{
    build_provider, location_from_config, request_current, request_forecast, WeatherError,
    WeatherServiceMessage,
};
