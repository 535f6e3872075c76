//! Fixed presentation tables: wind sectors and background assets.

use serde::{Deserialize, Serialize};

/// Eight principal compass directions, each owning a 45° sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Upper (inclusive) bound of each sector after North, in clockwise order.
const SECTORS: [(f64, CompassDirection); 7] = [
    (67.5, CompassDirection::NorthEast),
    (112.5, CompassDirection::East),
    (157.5, CompassDirection::SouthEast),
    (202.5, CompassDirection::South),
    (247.5, CompassDirection::SouthWest),
    (292.5, CompassDirection::West),
    (337.5, CompassDirection::NorthWest),
];

impl CompassDirection {
    /// Map a wind bearing to its sector.
    ///
    /// Sectors are `(lower, upper]`; North wraps the seam as `> 337.5 || <= 22.5`.
    /// Values outside `[0, 360)` are normalised first. NaN has no direction.
    pub fn from_degrees(deg: f64) -> Option<Self> {
        if deg.is_nan() {
            return None;
        }
        let deg = if (0.0..360.0).contains(&deg) {
            deg
        } else {
            deg.rem_euclid(360.0)
        };

        if deg <= 22.5 || deg > 337.5 {
            return Some(CompassDirection::North);
        }
        SECTORS
            .iter()
            .find(|(upper, _)| deg <= *upper)
            .map(|(_, dir)| *dir)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::North => "North",
            Self::NorthEast => "North-East",
            Self::East => "East",
            Self::SouthEast => "South-East",
            Self::South => "South",
            Self::SouthWest => "South-West",
            Self::West => "West",
            Self::NorthWest => "North-West",
        }
    }
}

impl std::fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Background artwork chosen from the provider's coarse weather category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundAsset {
    Clear,
    Rain,
    Clouds,
    Snow,
    #[default]
    Default,
}

impl BackgroundAsset {
    /// Case-insensitive category match; anything unrecognized falls back to `Default`.
    pub fn from_category(category: &str) -> Self {
        match category.to_lowercase().as_str() {
            "clear" => Self::Clear,
            "rain" => Self::Rain,
            "clouds" => Self::Clouds,
            "snow" => Self::Snow,
            _ => Self::Default,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Clear => "sunny.gif",
            Self::Rain => "rainy.gif",
            Self::Clouds => "cloudy.jpg",
            Self::Snow => "snowy.gif",
            Self::Default => "default.png",
        }
    }
}

/// Provider icon image for an icon code such as `10d`
pub fn icon_url(icon: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon}@2x.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_directions() {
        let expected = [
            (0.0, CompassDirection::North),
            (45.0, CompassDirection::NorthEast),
            (90.0, CompassDirection::East),
            (135.0, CompassDirection::SouthEast),
            (180.0, CompassDirection::South),
            (225.0, CompassDirection::SouthWest),
            (270.0, CompassDirection::West),
            (315.0, CompassDirection::NorthWest),
        ];
        for (deg, dir) in expected {
            assert_eq!(CompassDirection::from_degrees(deg), Some(dir), "{deg}°");
        }
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(CompassDirection::from_degrees(22.5), Some(CompassDirection::North));
        assert_eq!(CompassDirection::from_degrees(22.6), Some(CompassDirection::NorthEast));
        assert_eq!(CompassDirection::from_degrees(67.5), Some(CompassDirection::NorthEast));
        assert_eq!(CompassDirection::from_degrees(337.5), Some(CompassDirection::NorthWest));
        assert_eq!(CompassDirection::from_degrees(337.6), Some(CompassDirection::North));
        assert_eq!(CompassDirection::from_degrees(359.99), Some(CompassDirection::North));
    }

    #[test]
    fn test_every_degree_has_a_direction() {
        for tenth in 0..3600 {
            let deg = f64::from(tenth) / 10.0;
            assert!(CompassDirection::from_degrees(deg).is_some(), "{deg}°");
        }
    }

    #[test]
    fn test_out_of_range_is_normalised() {
        assert_eq!(CompassDirection::from_degrees(360.0), Some(CompassDirection::North));
        assert_eq!(CompassDirection::from_degrees(450.0), Some(CompassDirection::East));
        assert_eq!(CompassDirection::from_degrees(-90.0), Some(CompassDirection::West));
        assert_eq!(CompassDirection::from_degrees(f64::NAN), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CompassDirection::NorthEast.label(), "North-East");
        assert_eq!(CompassDirection::SouthWest.to_string(), "South-West");
    }

    #[test]
    fn test_background_is_case_insensitive() {
        assert_eq!(BackgroundAsset::from_category("Clear"), BackgroundAsset::Clear);
        assert_eq!(BackgroundAsset::from_category("RAIN"), BackgroundAsset::Rain);
        assert_eq!(BackgroundAsset::from_category("clouds"), BackgroundAsset::Clouds);
        assert_eq!(BackgroundAsset::from_category("Snow"), BackgroundAsset::Snow);
    }

    #[test]
    fn test_unknown_category_uses_default() {
        assert_eq!(BackgroundAsset::from_category("tornado"), BackgroundAsset::Default);
        assert_eq!(BackgroundAsset::from_category(""), BackgroundAsset::Default);
        assert_eq!(BackgroundAsset::Default.file_name(), "default.png");
    }
}
