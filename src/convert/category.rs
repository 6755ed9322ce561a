//! Measurement categories and canonical base units
//!
//! Every measurement category normalizes to a single canonical base unit
//! (kg, m, l, s, kph, m²). The category of a value is always derived from
//! its base unit, never stored separately.

use serde::{Deserialize, Serialize};

/// Category of a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementCategory {
    Weight,
    Length,
    Volume,
    Time,
    Speed,
    Area,
    #[default]
    Unknown,
}

impl MeasurementCategory {
    /// The canonical base unit all values of this category normalize to
    pub fn base_unit(&self) -> &'static str {
        match self {
            MeasurementCategory::Weight => "kg",
            MeasurementCategory::Length => "m",
            MeasurementCategory::Volume => "l",
            MeasurementCategory::Time => "s",
            MeasurementCategory::Speed => "kph",
            MeasurementCategory::Area => "m²",
            MeasurementCategory::Unknown => "",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementCategory::Weight => "weight",
            MeasurementCategory::Length => "length",
            MeasurementCategory::Volume => "volume",
            MeasurementCategory::Time => "time",
            MeasurementCategory::Speed => "speed",
            MeasurementCategory::Area => "area",
            MeasurementCategory::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "weight" => MeasurementCategory::Weight,
            "length" => MeasurementCategory::Length,
            "volume" => MeasurementCategory::Volume,
            "time" => MeasurementCategory::Time,
            "speed" => MeasurementCategory::Speed,
            "area" => MeasurementCategory::Area,
            _ => MeasurementCategory::Unknown,
        }
    }
}

/// Determine the measurement category from a canonical base unit
pub fn category_of(base_unit: &str) -> MeasurementCategory {
    match base_unit {
        "kg" => MeasurementCategory::Weight,
        "m" => MeasurementCategory::Length,
        "l" => MeasurementCategory::Volume,
        "s" => MeasurementCategory::Time,
        "kph" => MeasurementCategory::Speed,
        "m²" => MeasurementCategory::Area,
        _ => MeasurementCategory::Unknown,
    }
}

/// User-friendly display name for a canonical base unit
pub fn base_unit_display_name(base_unit: &str) -> &str {
    match base_unit {
        "kg" => "kilograms",
        "m" => "meters",
        "l" => "liters",
        "s" => "seconds",
        "kph" => "kilometers per hour",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of_base_units() {
        assert_eq!(category_of("kg"), MeasurementCategory::Weight);
        assert_eq!(category_of("m"), MeasurementCategory::Length);
        assert_eq!(category_of("l"), MeasurementCategory::Volume);
        assert_eq!(category_of("s"), MeasurementCategory::Time);
        assert_eq!(category_of("kph"), MeasurementCategory::Speed);
        assert_eq!(category_of("m²"), MeasurementCategory::Area);
    }

    #[test]
    fn test_category_of_unrecognized() {
        assert_eq!(category_of("parsec"), MeasurementCategory::Unknown);
        assert_eq!(category_of(""), MeasurementCategory::Unknown);
        // category_of expects the canonical spelling, not an alias
        assert_eq!(category_of("KG"), MeasurementCategory::Unknown);
    }

    #[test]
    fn test_base_unit_round_trip() {
        for cat in [
            MeasurementCategory::Weight,
            MeasurementCategory::Length,
            MeasurementCategory::Volume,
            MeasurementCategory::Time,
            MeasurementCategory::Speed,
            MeasurementCategory::Area,
        ] {
            assert_eq!(category_of(cat.base_unit()), cat);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(base_unit_display_name("kg"), "kilograms");
        assert_eq!(base_unit_display_name("kph"), "kilometers per hour");
        // Unmapped base units display verbatim
        assert_eq!(base_unit_display_name("m²"), "m²");
    }

    #[test]
    fn test_category_string_round_trip() {
        assert_eq!(MeasurementCategory::from_str("weight"), MeasurementCategory::Weight);
        assert_eq!(MeasurementCategory::from_str("SPEED"), MeasurementCategory::Speed);
        assert_eq!(MeasurementCategory::from_str("bogus"), MeasurementCategory::Unknown);
        assert_eq!(MeasurementCategory::Weight.as_str(), "weight");
    }
}
