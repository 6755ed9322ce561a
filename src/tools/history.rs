//! History MCP Tools
//!
//! Tools for reviewing recent conversions.

use serde::Serialize;

use crate::db::Database;
use crate::models::{ConversionHistory, QuirkyUnit};

/// A history entry joined with its quirky unit for display
#[derive(Debug, Serialize)]
pub struct ConversionHistoryEntry {
    pub id: i64,
    pub original_query: String,
    pub standard_value: f64,
    pub standard_unit: String,
    pub quirky_value: f64,
    pub quirky_unit_name: String,
    pub quirky_unit_icon: String,
    pub timestamp: String,
}

/// Response for recent_conversions
#[derive(Debug, Serialize)]
pub struct RecentConversionsResponse {
    pub conversions: Vec<ConversionHistoryEntry>,
    pub total: usize,
}

/// List the most recent conversions, newest first
pub fn recent_conversions(db: &Database, limit: i64) -> Result<RecentConversionsResponse, String> {
    let limit = limit.clamp(1, 100);

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let entries = ConversionHistory::recent(&conn, limit)
        .map_err(|e| format!("Failed to list conversions: {}", e))?;

    let mut conversions = Vec::with_capacity(entries.len());
    for entry in entries {
        let unit = QuirkyUnit::get_by_id(&conn, entry.quirky_unit_id)
            .map_err(|e| format!("Failed to load quirky unit: {}", e))?;

        let (name, icon) = match unit {
            Some(unit) => (unit.name, unit.icon),
            // The unit was removed after the conversion was recorded
            None => ("(deleted unit)".to_string(), String::new()),
        };

        conversions.push(ConversionHistoryEntry {
            id: entry.id,
            original_query: entry.original_query,
            standard_value: entry.standard_value,
            standard_unit: entry.standard_unit,
            quirky_value: entry.quirky_value,
            quirky_unit_name: name,
            quirky_unit_icon: icon,
            timestamp: entry.timestamp,
        });
    }

    let total = conversions.len();

    Ok(RecentConversionsResponse { conversions, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, seed};
    use crate::tools::convert::convert_measurement;

    fn test_db() -> Database {
        let db = Database::in_memory().unwrap();
        db.with_conn(|conn| {
            migrations::run_migrations(conn)?;
            seed::seed_default_units(conn)?;
            Ok(())
        })
        .unwrap();
        db
    }

    #[test]
    fn test_recent_conversions_joins_unit_names() {
        let db = test_db();

        convert_measurement(&db, "1500 kg in cats").unwrap();
        convert_measurement(&db, "10 km in bananas").unwrap();

        let response = recent_conversions(&db, 10).unwrap();
        assert_eq!(response.total, 2);
        assert_eq!(response.conversions[0].original_query, "10 km in bananas");
        assert_eq!(response.conversions[0].quirky_unit_name, "Banana");
        assert_eq!(response.conversions[1].quirky_unit_name, "House Cat");
    }

    #[test]
    fn test_limit_is_clamped() {
        let db = test_db();

        for _ in 0..3 {
            convert_measurement(&db, "2 tonnes").unwrap();
        }

        // A zero or negative limit still returns at least one entry
        let response = recent_conversions(&db, 0).unwrap();
        assert_eq!(response.total, 1);
    }

    #[test]
    fn test_empty_history() {
        let db = test_db();
        let response = recent_conversions(&db, 10).unwrap();
        assert_eq!(response.total, 0);
        assert!(response.conversions.is_empty());
    }
}
