//! Catalog MCP Tools
//!
//! Tools for browsing and extending the quirky unit catalog.

use serde::Serialize;

use crate::convert::MeasurementCategory;
use crate::db::Database;
use crate::models::{QuirkyUnit, QuirkyUnitCreate};

/// Response for list_quirky_units
#[derive(Debug, Serialize)]
pub struct ListQuirkyUnitsResponse {
    pub units: Vec<QuirkyUnit>,
    pub total: usize,
}

/// Response for add_quirky_unit
#[derive(Debug, Serialize)]
pub struct AddQuirkyUnitResponse {
    pub id: i64,
    pub name: String,
    pub category: MeasurementCategory,
    pub unit: String,
}

/// List every quirky unit in the catalog
pub fn list_quirky_units(db: &Database) -> Result<ListQuirkyUnitsResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let units = QuirkyUnit::list_all(&conn)
        .map_err(|e| format!("Failed to list quirky units: {}", e))?;
    let total = units.len();

    Ok(ListQuirkyUnitsResponse { units, total })
}

/// List quirky units for a single category
pub fn list_quirky_units_by_category(
    db: &Database,
    category: &str,
) -> Result<ListQuirkyUnitsResponse, String> {
    let parsed = MeasurementCategory::from_str(category);
    if parsed == MeasurementCategory::Unknown {
        return Err(format!(
            "Unknown category: {} (expected weight, length, volume, time, speed, or area)",
            category
        ));
    }

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let units = QuirkyUnit::list_by_category(&conn, parsed)
        .map_err(|e| format!("Failed to list quirky units: {}", e))?;
    let total = units.len();

    Ok(ListQuirkyUnitsResponse { units, total })
}

/// Add a new quirky unit to the catalog
pub fn add_quirky_unit(
    db: &Database,
    data: QuirkyUnitCreate,
) -> Result<AddQuirkyUnitResponse, String> {
    let name = data.name.trim();
    if name.is_empty() {
        return Err("Quirky unit name cannot be empty".to_string());
    }
    if data.name_plural.trim().is_empty() {
        return Err("Quirky unit plural name cannot be empty".to_string());
    }
    if data.value <= 0.0 {
        return Err("value must be greater than 0".to_string());
    }
    if data.category == MeasurementCategory::Unknown {
        return Err(
            "category must be one of: weight, length, volume, time, speed, area".to_string(),
        );
    }
    // The stored magnitude must be in the category's canonical base unit
    if data.unit != data.category.base_unit() {
        return Err(format!(
            "unit must be the category's base unit ({} for {})",
            data.category.base_unit(),
            data.category.as_str()
        ));
    }

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let unit = QuirkyUnit::create(&conn, &data)
        .map_err(|e| format!("Failed to create quirky unit: {}", e))?;

    Ok(AddQuirkyUnitResponse {
        id: unit.id,
        name: unit.name,
        category: unit.category,
        unit: unit.unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, seed};

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

    fn new_unit() -> QuirkyUnitCreate {
        QuirkyUnitCreate {
            name: "Garden Gnome".to_string(),
            name_plural: "Garden Gnomes".to_string(),
            value: 1.5,
            unit: "kg".to_string(),
            category: MeasurementCategory::Weight,
            icon: "🧙".to_string(),
            description: None,
            fun_fact: None,
        }
    }

    #[test]
    fn test_list_all() {
        let db = test_db();
        let response = list_quirky_units(&db).unwrap();
        assert_eq!(response.total, 16);
    }

    #[test]
    fn test_list_by_category() {
        let db = test_db();
        let response = list_quirky_units_by_category(&db, "speed").unwrap();
        assert_eq!(response.total, 2);
        assert!(response.units.iter().all(|u| u.unit == "kph"));
    }

    #[test]
    fn test_list_by_unknown_category() {
        let db = test_db();
        let err = list_quirky_units_by_category(&db, "flavor").unwrap_err();
        assert!(err.contains("Unknown category"));
    }

    #[test]
    fn test_add_quirky_unit() {
        let db = test_db();
        let response = add_quirky_unit(&db, new_unit()).unwrap();
        assert!(response.id > 0);
        assert_eq!(response.name, "Garden Gnome");

        let all = list_quirky_units(&db).unwrap();
        assert_eq!(all.total, 17);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let db = test_db();

        let mut unit = new_unit();
        unit.name = "  ".to_string();
        assert!(add_quirky_unit(&db, unit).unwrap_err().contains("name"));

        let mut unit = new_unit();
        unit.value = 0.0;
        assert!(add_quirky_unit(&db, unit).unwrap_err().contains("value"));

        let mut unit = new_unit();
        unit.category = MeasurementCategory::Unknown;
        assert!(add_quirky_unit(&db, unit).unwrap_err().contains("category"));

        // Weight entries must be stored in kg
        let mut unit = new_unit();
        unit.unit = "lbs".to_string();
        assert!(add_quirky_unit(&db, unit).unwrap_err().contains("base unit"));
    }
}
