//! SQLite persistence for reports.
//!
//! Every call opens its own connection to the configured database file, the
//! same way the handlers do not share a connection pool. All functions are
//! blocking and are meant to run inside `web::block`.

use common::model::report::Report;
use rusqlite::{params, Connection};
use std::path::Path;

/// Creates the `reports` table if it does not exist yet.
pub fn create_table(db_path: &Path) -> Result<(), String> {
    let conn = Connection::open(db_path).map_err(|e| e.to_string())?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS reports (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            imagePath TEXT,
            location TEXT,
            description TEXT,
            fecha TIMESTAMP
        )",
        [],
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}

/// Inserts a report stamped with the current local time and returns its id.
pub fn insert_report(
    db_path: &Path,
    image_path: &str,
    location: &str,
    description: &str,
) -> Result<i64, String> {
    let conn = Connection::open(db_path).map_err(|e| e.to_string())?;
    conn.execute(
        "INSERT INTO reports (imagePath, location, description, fecha)
         VALUES (?1, ?2, ?3, strftime('%Y-%m-%d %H:%M:%f', 'now', 'localtime'))",
        params![image_path, location, description],
    )
    .map_err(|e| e.to_string())?;
    Ok(conn.last_insert_rowid())
}

/// Lists every report in insertion order.
pub fn get_reports(db_path: &Path) -> Result<Vec<Report>, String> {
    let conn = Connection::open(db_path).map_err(|e| e.to_string())?;
    let mut stmt = conn
        .prepare("SELECT id, imagePath, location, description, fecha FROM reports ORDER BY id")
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Report {
                id: row.get(0)?,
                image_path: row.get(1)?,
                location: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                description: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                fecha: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            })
        })
        .map_err(|e| e.to_string())?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn create_table_is_idempotent() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("data.db");

        create_table(&db).unwrap();
        create_table(&db).unwrap();

        assert!(get_reports(&db).unwrap().is_empty());
    }

    #[test]
    fn inserted_reports_are_listed_in_id_order() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("data.db");
        create_table(&db).unwrap();

        let first = insert_report(&db, "a.png", "19.43,-99.13", "Pothole").unwrap();
        let second = insert_report(&db, "b.png", "20.1,-100.2", "Fuga de agua").unwrap();

        let reports = get_reports(&db).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].id, first);
        assert_eq!(reports[1].id, second);
        assert_eq!(reports[0].description, "Pothole");
        assert_eq!(reports[0].location, "19.43,-99.13");
        assert_eq!(reports[0].image_path.as_deref(), Some("a.png"));
        assert_eq!(reports[1].description, "Fuga de agua");
    }

    #[test]
    fn fecha_is_stamped_on_insert() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("data.db");
        create_table(&db).unwrap();

        insert_report(&db, "a.png", "1,2", "x").unwrap();

        let fecha = &get_reports(&db).unwrap()[0].fecha;
        // YYYY-MM-DD HH:MM:SS.SSS
        assert_eq!(fecha.len(), 23);
        assert_eq!(&fecha[4..5], "-");
        assert_eq!(&fecha[10..11], " ");
    }

    #[test]
    fn listing_without_table_fails() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("empty.db");

        assert!(get_reports(&db).is_err());
    }
}
