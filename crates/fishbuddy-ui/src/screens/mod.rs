pub mod forecast;
pub mod logbook;
pub mod tips;
pub mod weather;

pub use forecast::{ForecastRow, ForecastScreen};
pub use logbook::{LogCard, LogbookScreen};
pub use tips::{Tip, TipsScreen};
pub use weather::{WeatherScreen, WeatherView};
