use chrono::NaiveDateTime;

/// Timestamp layouts the forecast feed is known to use.
const SOURCE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Reformat a forecast timestamp as `DD.MM.YYYY HH:mm`.
///
/// Timestamps that match none of the known layouts are returned unchanged.
pub fn format_forecast_time(raw: &str) -> String {
    let trimmed = raw.trim();
    SOURCE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| {
            tracing::debug!("Unrecognized forecast timestamp: {}", raw);
            raw.to_string()
        })
}

/// Round to the nearest integer with halves going up (`-2.5` -> `-2`).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
