//! Utility to migrate the database and seed the default quirky unit catalog

use std::path::PathBuf;

fn get_database_path() -> PathBuf {
    std::env::var("WHIMSY_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            std::fs::create_dir_all(&path).ok();
            path.push("whimsy.db");
            path
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = get_database_path();
    println!("Database path: {}", db_path.display());

    let database = whimsy::db::Database::new(&db_path)?;

    // Run migrations
    database.with_conn(|conn| {
        whimsy::db::migrations::run_migrations(conn)?;
        Ok(())
    })?;

    // Seed the default catalog
    let (seeded, total) = database.with_conn(|conn| {
        let seeded = whimsy::db::seed::seed_default_units(conn)?;
        let total = whimsy::models::QuirkyUnit::count(conn)?;
        Ok((seeded, total))
    })?;

    if seeded > 0 {
        println!("Seeded {} default quirky units", seeded);
    } else {
        println!("Catalog already populated, nothing to seed");
    }
    println!("Catalog now contains {} quirky units", total);

    Ok(())
}
