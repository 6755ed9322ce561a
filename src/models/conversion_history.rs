//! Conversion History model
//!
//! A record of each completed conversion, kept for the recent-conversions
//! listing.

use chrono::Utc;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// A recorded conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionHistory {
    pub id: i64,
    pub original_query: String,
    pub standard_value: f64,
    pub standard_unit: String,
    pub quirky_unit_id: i64,
    pub quirky_value: f64,
    pub timestamp: String,
}

/// Data for recording a new conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionHistoryCreate {
    pub original_query: String,
    pub standard_value: f64,
    pub standard_unit: String,
    pub quirky_unit_id: i64,
    pub quirky_value: f64,
}

impl ConversionHistory {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            original_query: row.get("original_query")?,
            standard_value: row.get("standard_value")?,
            standard_unit: row.get("standard_unit")?,
            quirky_unit_id: row.get("quirky_unit_id")?,
            quirky_value: row.get("quirky_value")?,
            timestamp: row.get("timestamp")?,
        })
    }

    /// Record a conversion
    pub fn create(conn: &Connection, data: &ConversionHistoryCreate) -> DbResult<Self> {
        let timestamp = Utc::now().to_rfc3339();

        conn.execute(
            r#"
            INSERT INTO conversion_history (
                original_query, standard_value, standard_unit,
                quirky_unit_id, quirky_value, timestamp
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                data.original_query,
                data.standard_value,
                data.standard_unit,
                data.quirky_unit_id,
                data.quirky_value,
                timestamp,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    /// Get a history entry by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM conversion_history WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List the most recent conversions, newest first
    pub fn recent(conn: &Connection, limit: i64) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM conversion_history ORDER BY timestamp DESC, id DESC LIMIT ?1",
        )?;

        let entries = stmt
            .query_map([limit], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Count history entries
    pub fn count(conn: &Connection) -> DbResult<i64> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM conversion_history",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::MeasurementCategory;
    use crate::db::{migrations, Database};
    use crate::models::{QuirkyUnit, QuirkyUnitCreate};

    fn test_db() -> Database {
        let db = Database::in_memory().unwrap();
        db.with_conn(|conn| migrations::run_migrations(conn)).unwrap();
        db
    }

    fn seed_unit(conn: &Connection) -> QuirkyUnit {
        QuirkyUnit::create(
            conn,
            &QuirkyUnitCreate {
                name: "House Cat".to_string(),
                name_plural: "House Cats".to_string(),
                value: 4.5,
                unit: "kg".to_string(),
                category: MeasurementCategory::Weight,
                icon: "🐈".to_string(),
                description: None,
                fun_fact: None,
            },
        )
        .unwrap()
    }

    fn entry(query: &str, unit_id: i64) -> ConversionHistoryCreate {
        ConversionHistoryCreate {
            original_query: query.to_string(),
            standard_value: 1500.0,
            standard_unit: "kg".to_string(),
            quirky_unit_id: unit_id,
            quirky_value: 1500.0 / 4.5,
        }
    }

    #[test]
    fn test_create_sets_timestamp() {
        let db = test_db();
        let conn = db.get_conn().unwrap();
        let unit = seed_unit(&conn);

        let recorded = ConversionHistory::create(&conn, &entry("1500 kg in cats", unit.id)).unwrap();
        assert!(recorded.id > 0);
        assert_eq!(recorded.original_query, "1500 kg in cats");
        assert!(!recorded.timestamp.is_empty());
    }

    #[test]
    fn test_recent_orders_newest_first_and_limits() {
        let db = test_db();
        let conn = db.get_conn().unwrap();
        let unit = seed_unit(&conn);

        for i in 0..5 {
            ConversionHistory::create(&conn, &entry(&format!("query {}", i), unit.id)).unwrap();
        }

        let recent = ConversionHistory::recent(&conn, 3).unwrap();
        assert_eq!(recent.len(), 3);
        // Equal timestamps fall back to insertion order, newest first
        assert_eq!(recent[0].original_query, "query 4");
        assert_eq!(recent[2].original_query, "query 2");

        assert_eq!(ConversionHistory::count(&conn).unwrap(), 5);
    }

    #[test]
    fn test_recent_on_empty_history() {
        let db = test_db();
        let conn = db.get_conn().unwrap();
        assert!(ConversionHistory::recent(&conn, 10).unwrap().is_empty());
    }
}
