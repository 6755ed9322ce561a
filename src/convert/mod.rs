//! Whimsical measurement conversion engine
//!
//! Pipeline: parse a natural language query, normalize to a canonical base
//! unit, pick the most pleasant quirky unit from the catalog, then format
//! the result with a fun fact.

pub mod category;
pub mod facts;
pub mod format;
pub mod normalize;
pub mod parser;
pub mod selector;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::QuirkyUnit;

pub use category::{base_unit_display_name, category_of, MeasurementCategory};
pub use facts::generate_fun_fact;
pub use format::{format_measurement, format_number, format_precision, format_quirky_amount};
pub use normalize::{base_factor, normalize, Normalized};
pub use parser::{parse_query, ParsedQuery};
pub use selector::select_quirky_units;

/// Conversion failures
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid measurement: need a positive value and unit")]
    InvalidMeasurement,

    #[error("No appropriate quirky units found for {value} {unit}")]
    NoMatchingQuirkyUnit { value: f64, unit: String },
}

/// A completed whimsical conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub original_query: String,
    pub standard_value: f64,
    pub standard_unit: String,
    pub standard_display: String,
    pub quirky_unit: QuirkyUnit,
    pub quirky_amount: f64,
    pub quirky_amount_display: String,
    pub fun_fact: String,
}

/// Convert a parsed measurement into the most pleasant quirky unit from
/// the catalog
pub fn convert_to_quirky(
    parsed: &ParsedQuery,
    catalog: &[QuirkyUnit],
) -> Result<ConversionResult, ConvertError> {
    if parsed.value <= 0.0 || parsed.unit.is_empty() {
        return Err(ConvertError::InvalidMeasurement);
    }

    let normalized = normalize(parsed.value, &parsed.unit);

    let candidates = select_quirky_units(
        normalized.value,
        &normalized.base_unit,
        catalog,
        parsed.target_unit.as_deref(),
    );

    let selected = candidates
        .first()
        .ok_or_else(|| ConvertError::NoMatchingQuirkyUnit {
            value: normalized.value,
            unit: normalized.base_unit.clone(),
        })?;

    let quirky_amount = normalized.value / selected.value;

    let standard_display = format_measurement(normalized.value, &normalized.base_unit);
    let quirky_amount_display = format_quirky_amount(quirky_amount, selected);
    let fun_fact = generate_fun_fact(
        normalized.value,
        &normalized.base_unit,
        quirky_amount,
        selected,
    );

    Ok(ConversionResult {
        original_query: parsed.original_query.clone(),
        standard_value: normalized.value,
        standard_unit: normalized.base_unit,
        standard_display,
        quirky_unit: (*selected).clone(),
        quirky_amount,
        quirky_amount_display,
        fun_fact,
    })
}
