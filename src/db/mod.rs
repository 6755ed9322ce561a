//! Database module
//!
//! Handles SQLite connection, migrations, and catalog seeding.

pub mod connection;
pub mod migrations;
pub mod seed;

pub use connection::{Database, DbError, DbResult};
