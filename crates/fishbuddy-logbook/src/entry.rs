use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One catch record. Every field is free text and may be empty.
///
/// Field names on disk follow the established storage format
/// (`fishSpot`, `catchDetails` for the species).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatchLogEntry {
    pub bait: String,
    pub fish_spot: String,
    pub weather: String,
    /// `YYYY-MM-DD` when set through the date picker
    pub date: String,
    #[serde(rename = "catchDetails")]
    pub fish_species: String,
    pub weight: String,
    pub length: String,
    pub gear: String,
}

/// Editable fields of the entry form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Bait,
    FishSpot,
    Weather,
    Date,
    FishSpecies,
    Weight,
    Length,
    Gear,
}

impl EntryField {
    pub const ALL: [EntryField; 8] = [
        EntryField::Bait,
        EntryField::FishSpot,
        EntryField::Weather,
        EntryField::Date,
        EntryField::FishSpecies,
        EntryField::Weight,
        EntryField::Length,
        EntryField::Gear,
    ];

    /// Label used when listing a saved entry
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bait => "Bait",
            Self::FishSpot => "FishSpot",
            Self::Weather => "Weather",
            Self::Date => "Date",
            Self::FishSpecies => "Fish Species",
            Self::Weight => "Weight",
            Self::Length => "Length",
            Self::Gear => "Gear",
        }
    }
}

impl CatchLogEntry {
    pub fn get(&self, field: EntryField) -> &str {
        match field {
            EntryField::Bait => &self.bait,
            EntryField::FishSpot => &self.fish_spot,
            EntryField::Weather => &self.weather,
            EntryField::Date => &self.date,
            EntryField::FishSpecies => &self.fish_species,
            EntryField::Weight => &self.weight,
            EntryField::Length => &self.length,
            EntryField::Gear => &self.gear,
        }
    }

    /// Overwrite one field. Weight and length are not checked for being numeric.
    pub fn set(&mut self, field: EntryField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EntryField::Bait => self.bait = value,
            EntryField::FishSpot => self.fish_spot = value,
            EntryField::Weather => self.weather = value,
            EntryField::Date => self.date = value,
            EntryField::FishSpecies => self.fish_species = value,
            EntryField::Weight => self.weight = value,
            EntryField::Length => self.length = value,
            EntryField::Gear => self.gear = value,
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date.format("%Y-%m-%d").to_string();
    }

    /// Non-empty fields with their labels, in display order
    pub fn display_fields(&self) -> Vec<(&'static str, &str)> {
        EntryField::ALL
            .iter()
            .map(|f| (f.label(), self.get(*f)))
            .filter(|(_, v)| !v.is_empty())
            .collect()
    }

    pub fn is_blank(&self) -> bool {
        EntryField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
