//! SQLite preset storage backend.
//!
//! Presets live in a single `simulations` table. The schema is created on
//! open when missing, so a fresh path is ready to use.

mod row;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};

use crate::error::{DnaSimError, Result};
use crate::storage::traits::PresetStore;
use crate::storage::types::{NewPreset, Preset};

use row::{PresetRow, PRESET_COLUMNS};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS simulations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    text_input TEXT NOT NULL,
    mapping_a TEXT NOT NULL,
    mapping_c TEXT NOT NULL,
    mapping_g TEXT NOT NULL,
    mapping_t TEXT NOT NULL,
    created_at TEXT NOT NULL
);
"#;

/// Durable preset store backed by a SQLite database file.
pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::init(conn, Some(path.to_path_buf()))
    }

    /// Open a private in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            path,
            conn: Mutex::new(conn),
        })
    }

    /// Database file path, or `None` for an in-memory database.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| DnaSimError::Storage("SQLite connection poisoned".to_string()))
    }
}

impl PresetStore for SqliteStore {
    fn list_presets(&self) -> Result<Vec<Preset>> {
        let conn = self.lock_conn()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM simulations ORDER BY id",
            PRESET_COLUMNS
        ))?;
        let rows = stmt.query_map([], PresetRow::from_row)?;

        let mut presets = Vec::new();
        for row in rows {
            presets.push(Preset::try_from(row?)?);
        }
        Ok(presets)
    }

    fn get_preset(&self, id: i64) -> Result<Option<Preset>> {
        let conn = self.lock_conn()?;

        let row = conn
            .query_row(
                &format!("SELECT {} FROM simulations WHERE id = ?", PRESET_COLUMNS),
                [id],
                PresetRow::from_row,
            )
            .optional()?;

        row.map(Preset::try_from).transpose()
    }

    fn create_preset(&self, preset: &NewPreset) -> Result<Preset> {
        preset.validate()?;

        let conn = self.lock_conn()?;
        let created_at = Utc::now();

        conn.execute(
            r#"
            INSERT INTO simulations (name, text_input, mapping_a, mapping_c, mapping_g, mapping_t, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
            (
                &preset.name,
                &preset.text_input,
                &preset.mapping_a,
                &preset.mapping_c,
                &preset.mapping_g,
                &preset.mapping_t,
                created_at.to_rfc3339(),
            ),
        )?;
        let id = conn.last_insert_rowid();

        Ok(Preset::from_new(id, preset, created_at))
    }

    fn delete_preset(&self, id: i64) -> Result<bool> {
        let conn = self.lock_conn()?;
        let removed = conn.execute("DELETE FROM simulations WHERE id = ?", [id])?;
        Ok(removed > 0)
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::SymbolMapping;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_in_memory_crud() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.path().is_none());

        let created = store
            .create_preset(&NewPreset::new(
                "Swapped",
                "ACGT",
                &SymbolMapping::new("11", "10", "01", "00"),
            ))
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = store.get_preset(created.id).unwrap().expect("preset exists");
        assert_eq!(fetched, created);
        assert_eq!(fetched.mapping_a, "11");

        assert!(store.delete_preset(created.id).unwrap());
        assert!(!store.delete_preset(created.id).unwrap());
        assert!(store.get_preset(created.id).unwrap().is_none());
    }

    #[test]
    fn test_bad_timestamp_is_storage_error() {
        let store = SqliteStore::open_in_memory().unwrap();
        {
            let conn = store.lock_conn().unwrap();
            conn.execute(
                "INSERT INTO simulations (name, text_input, mapping_a, mapping_c, mapping_g, mapping_t, created_at) VALUES ('x', '', '00', '01', '10', '11', 'yesterday')",
                [],
            )
            .unwrap();
        }

        let err = store.list_presets().unwrap_err();
        assert!(matches!(err, DnaSimError::Storage(_)));
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(SqliteStore::open(&dir.path().join("presets.db")).unwrap());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store
                        .create_preset(&NewPreset::new(
                            format!("p{}", i),
                            "",
                            &SymbolMapping::default(),
                        ))
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(store.list_presets().unwrap().len(), 8);
    }
}
