//! Database migrations
//!
//! Schema creation and migration logic.

use rusqlite::Connection;

use super::connection::DbResult;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all migrations to bring the database up to the current schema version
pub fn run_migrations(conn: &Connection) -> DbResult<()> {
    // Create migrations table if it doesn't exist
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    // Get current version
    let current_version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    // Run migrations
    if current_version < 1 {
        migrate_v1(conn)?;
        conn.execute("INSERT INTO schema_migrations (version) VALUES (1)", [])?;
    }

    Ok(())
}

/// Migration v1: Initial schema
fn migrate_v1(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        r#"
        -- ============================================
        -- QUIRKY UNITS
        -- Catalog of relatable reference quantities
        -- ============================================
        CREATE TABLE quirky_units (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,                  -- e.g., "House Cat"
            name_plural TEXT NOT NULL,           -- e.g., "House Cats"
            value REAL NOT NULL,                 -- magnitude in the category's base unit
            unit TEXT NOT NULL,                  -- base unit: "kg", "m", "l", "s", "kph"
            category TEXT NOT NULL CHECK(category IN ('weight', 'length', 'volume', 'time', 'speed', 'area')),
            icon TEXT NOT NULL,                  -- emoji for display
            description TEXT,                    -- nullable
            fun_fact TEXT                        -- nullable, overrides generated facts
        );

        CREATE INDEX idx_quirky_units_category ON quirky_units(category);

        -- ============================================
        -- CONVERSION HISTORY
        -- Record of completed conversions
        -- ============================================
        CREATE TABLE conversion_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            original_query TEXT NOT NULL,
            standard_value REAL NOT NULL,
            standard_unit TEXT NOT NULL,
            quirky_unit_id INTEGER NOT NULL REFERENCES quirky_units(id) ON DELETE RESTRICT,
            quirky_value REAL NOT NULL,
            timestamp TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX idx_conversion_history_timestamp ON conversion_history(timestamp);
        "#,
    )?;

    Ok(())
}

/// Get the current schema version
pub fn get_schema_version(conn: &Connection) -> DbResult<i32> {
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);
    Ok(version)
}

/// Check if the database needs migration
pub fn needs_migration(conn: &Connection) -> DbResult<bool> {
    let current = get_schema_version(conn)?;
    Ok(current < SCHEMA_VERSION)
}
