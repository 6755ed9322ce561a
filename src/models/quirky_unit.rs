//! Quirky Unit model
//!
//! A catalog entry representing a relatable real-world reference quantity
//! (e.g. "House Cat" = 4.5 kg) used for comparisons.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::convert::MeasurementCategory;
use crate::db::DbResult;

/// A quirky reference unit from the catalog
///
/// `value` is always expressed in the canonical base unit of `category`
/// (kg for weight, m for length, and so on).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuirkyUnit {
    pub id: i64,
    pub name: String,
    pub name_plural: String,
    pub value: f64,
    pub unit: String,
    pub category: MeasurementCategory,
    pub icon: String,
    pub description: Option<String>,
    pub fun_fact: Option<String>,
}

/// Data for creating a new quirky unit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuirkyUnitCreate {
    pub name: String,
    pub name_plural: String,
    pub value: f64,
    pub unit: String,
    pub category: MeasurementCategory,
    pub icon: String,
    pub description: Option<String>,
    pub fun_fact: Option<String>,
}

impl QuirkyUnit {
    /// Create a QuirkyUnit from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            name_plural: row.get("name_plural")?,
            value: row.get("value")?,
            unit: row.get("unit")?,
            category: MeasurementCategory::from_str(
                row.get::<_, String>("category")?.as_str(),
            ),
            icon: row.get("icon")?,
            description: row.get("description")?,
            fun_fact: row.get("fun_fact")?,
        })
    }

    /// Insert a new quirky unit into the catalog
    pub fn create(conn: &Connection, data: &QuirkyUnitCreate) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO quirky_units (
                name, name_plural, value, unit, category, icon, description, fun_fact
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                data.name,
                data.name_plural,
                data.value,
                data.unit,
                data.category.as_str(),
                data.icon,
                data.description,
                data.fun_fact,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    /// Get a quirky unit by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM quirky_units WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(unit) => Ok(Some(unit)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List all quirky units in catalog order
    pub fn list_all(conn: &Connection) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM quirky_units ORDER BY id ASC")?;

        let units = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(units)
    }

    /// List quirky units for a single category, in catalog order
    pub fn list_by_category(
        conn: &Connection,
        category: MeasurementCategory,
    ) -> DbResult<Vec<Self>> {
        let mut stmt = conn
            .prepare("SELECT * FROM quirky_units WHERE category = ?1 ORDER BY id ASC")?;

        let units = stmt
            .query_map([category.as_str()], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(units)
    }

    /// Count catalog entries
    pub fn count(conn: &Connection) -> DbResult<i64> {
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM quirky_units", [], |row| row.get(0))?;
        Ok(count)
    }
}
