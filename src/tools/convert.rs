//! Conversion MCP Tools
//!
//! Tools for parsing measurement queries and running whimsical conversions.

use crate::convert::{convert_to_quirky, parse_query, ConversionResult, ParsedQuery};
use crate::db::Database;
use crate::models::{ConversionHistory, ConversionHistoryCreate, QuirkyUnit};

/// Parse a natural language measurement query without converting it
pub fn parse_measurement_query(query: &str) -> Result<ParsedQuery, String> {
    let query = query.trim();
    if query.is_empty() {
        return Err("Query cannot be empty".to_string());
    }

    Ok(parse_query(query))
}

/// Convert a measurement query into the most pleasant quirky unit
///
/// A successful conversion is recorded in history. History failures are
/// logged and swallowed so they never break the conversion itself.
pub fn convert_measurement(db: &Database, query: &str) -> Result<ConversionResult, String> {
    let query = query.trim();
    if query.is_empty() {
        return Err("Query cannot be empty".to_string());
    }

    let parsed = parse_query(query);

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let catalog = QuirkyUnit::list_all(&conn)
        .map_err(|e| format!("Failed to load quirky unit catalog: {}", e))?;

    let result = convert_to_quirky(&parsed, &catalog).map_err(|e| e.to_string())?;

    // Best-effort history; the conversion result stands either way
    let record = ConversionHistoryCreate {
        original_query: result.original_query.clone(),
        standard_value: result.standard_value,
        standard_unit: result.standard_unit.clone(),
        quirky_unit_id: result.quirky_unit.id,
        quirky_value: result.quirky_amount,
    };
    if let Err(e) = ConversionHistory::create(&conn, &record) {
        tracing::warn!("Failed to record conversion history: {}", e);
    }

    Ok(result)
}
