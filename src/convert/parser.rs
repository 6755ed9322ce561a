//! Natural language query parsing
//!
//! Extracts a numeric value, unit token, measurement category, and optional
//! target-unit phrase from free text. Parsing never fails; a query with no
//! recognizable measurement yields `Unknown` / 0 / "".

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::category::MeasurementCategory;

lazy_static! {
    /// Number followed by a unit token, optionally compound ("m/s")
    /// Examples: "1500 kilograms", "10.5m", "5 m/s"
    static ref VALUE_UNIT_PATTERN: Regex =
        Regex::new(r"(\d+(?:\.\d+)?)\s*([a-zA-Z]+(?:/[a-zA-Z]+)?)").unwrap();

    /// Target-unit phrase: "in bananas", "in dog years"
    /// Captures one or two words after "in", with an optional plural "s"
    static ref TARGET_UNIT_PATTERN: Regex =
        Regex::new(r"in\s+([a-zA-Z]+(?:\s+[a-zA-Z]+)?s?)").unwrap();
}

/// Unit tokens indicating each category, checked in priority order.
///
/// Matching is by substring containment against the extracted unit token,
/// not exact equality. This tolerates trailing punctuation and compound
/// tokens but is a known source of false positives (e.g. any token
/// containing "g" classifies as weight); the behavior is kept deliberately
/// for output compatibility.
const WEIGHT_UNITS: &[&str] = &["kg", "g", "lb", "lbs", "ton", "tons", "tonne", "tonnes"];
const LENGTH_UNITS: &[&str] = &["m", "cm", "mm", "km", "in", "ft", "feet", "mile", "miles"];
const VOLUME_UNITS: &[&str] = &["l", "ml", "gal", "gallon", "gallons"];
const TIME_UNITS: &[&str] = &["s", "sec", "min", "h", "hr", "hour", "day", "days", "year", "years"];
const SPEED_UNITS: &[&str] = &["kph", "mph", "m/s"];

/// Keywords hinting at each category when no unit token resolved one,
/// checked in priority order against the whole query.
const CATEGORY_KEYWORDS: &[(MeasurementCategory, &[&str])] = &[
    (MeasurementCategory::Weight, &["weight", "heavy", "weigh"]),
    (
        MeasurementCategory::Length,
        &["length", "distance", "tall", "height", "long", "wide", "far"],
    ),
    (
        MeasurementCategory::Volume,
        &["volume", "capacity", "holds", "contain"],
    ),
    (
        MeasurementCategory::Time,
        &["time", "duration", "last", "period"],
    ),
    (
        MeasurementCategory::Speed,
        &["speed", "fast", "velocity", "quick"],
    ),
];

/// Result of parsing a natural language measurement query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    /// Original input text for display
    pub original_query: String,
    /// Resolved measurement category (Unknown when unresolved)
    pub measurement_type: MeasurementCategory,
    /// Extracted numeric value (0 when none found)
    pub value: f64,
    /// Extracted unit token, lowercased ("" when none found)
    pub unit: String,
    /// Requested target unit from an "in X" phrase, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_unit: Option<String>,
}

/// Classify a unit token by substring containment against the category
/// token lists, in fixed priority order
fn classify_unit_token(unit: &str) -> MeasurementCategory {
    if WEIGHT_UNITS.iter().any(|u| unit.contains(u)) {
        MeasurementCategory::Weight
    } else if LENGTH_UNITS.iter().any(|u| unit.contains(u)) {
        MeasurementCategory::Length
    } else if VOLUME_UNITS.iter().any(|u| unit.contains(u)) {
        MeasurementCategory::Volume
    } else if TIME_UNITS.iter().any(|u| unit.contains(u)) {
        MeasurementCategory::Time
    } else if SPEED_UNITS.iter().any(|u| unit.contains(u)) {
        MeasurementCategory::Speed
    } else {
        MeasurementCategory::Unknown
    }
}

/// Parse a natural language query into a measurement
pub fn parse_query(query: &str) -> ParsedQuery {
    let mut result = ParsedQuery {
        original_query: query.to_string(),
        measurement_type: MeasurementCategory::Unknown,
        value: 0.0,
        unit: String::new(),
        target_unit: None,
    };

    let normalized = query.to_lowercase().trim().to_string();

    // Try to extract a number and unit token
    if let Some(caps) = VALUE_UNIT_PATTERN.captures(&normalized) {
        result.value = caps[1].parse().unwrap_or(0.0);
        result.unit = caps[2].to_lowercase();
        result.measurement_type = classify_unit_token(&result.unit);
    }

    // If the category is still unknown, fall back to keyword hints from the
    // whole query
    if result.measurement_type == MeasurementCategory::Unknown {
        for (category, keywords) in CATEGORY_KEYWORDS {
            if keywords.iter().any(|k| normalized.contains(k)) {
                result.measurement_type = *category;
                break;
            }
        }
    }

    // Independently extract a target unit ("in bananas"); this does not
    // depend on the number/unit extraction succeeding
    if let Some(caps) = TARGET_UNIT_PATTERN.captures(&normalized) {
        result.target_unit = Some(caps[1].trim().to_lowercase());
    }

    result
}
