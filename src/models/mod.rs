//! Data models
//!
//! Database-backed types for the quirky unit catalog and conversion history.

pub mod conversion_history;
pub mod quirky_unit;

pub use conversion_history::{ConversionHistory, ConversionHistoryCreate};
pub use quirky_unit::{QuirkyUnit, QuirkyUnitCreate};
