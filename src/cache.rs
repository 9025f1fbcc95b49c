use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StorageError;
use crate::persistence::KeyValueStore;

/// SQLite-backed key/value table
pub struct KvDb {
    conn: Mutex<Connection>,
}

impl KvDb {
    /// Open (or create) the store at `path`, creating parent directories
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let db = KvDb {
            conn: Mutex::new(conn),
        };
        db.init_schema()?;

        Ok(db)
    }

    pub fn new_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = KvDb {
            conn: Mutex::new(conn),
        };
        db.init_schema()?;

        Ok(db)
    }

    /// Durable store location: `<data_dir>/quotetui/quotes.db`
    pub fn default_durable_path(data_dir: Option<&Path>) -> PathBuf {
        match data_dir {
            Some(dir) => dir.join("quotes.db"),
            None => match dirs::data_dir() {
                Some(dir) => dir.join("quotetui").join("quotes.db"),
                // Fallback to the temp dir if no data dir available
                None => std::env::temp_dir().join("quotetui").join("quotes.db"),
            },
        }
    }

    /// Session store location, outlives a restart but not the login session
    pub fn default_session_path() -> PathBuf {
        std::env::temp_dir().join("quotetui-session.db")
    }

    fn init_schema(&self) -> Result<(), StorageError> {
        let conn = self.lock();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            ) WITHOUT ROWID;
            ",
        )?;

        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        // A panic while holding the lock leaves the connection itself intact
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

impl KeyValueStore for KvDb {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.lock();
        let mut stmt = conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let value = stmt
            .query_row(params![key], |row| row.get::<_, String>(0))
            .optional()?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_returns_none() {
        let db = KvDb::new_in_memory().unwrap();
        assert_eq!(db.get("quotes").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let db = KvDb::new_in_memory().unwrap();
        db.set("lastCategoryFilter", "Tech").unwrap();
        db.set("lastCategoryFilter", "all").unwrap();
        assert_eq!(db.get("lastCategoryFilter").unwrap().as_deref(), Some("all"));
    }

    #[test]
    fn test_remove_deletes_key() {
        let db = KvDb::new_in_memory().unwrap();
        db.set("lastViewedQuote", "{}").unwrap();
        db.remove("lastViewedQuote").unwrap();
        assert_eq!(db.get("lastViewedQuote").unwrap(), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("quotes.db");

        {
            let db = KvDb::open(&path).unwrap();
            db.set("quotes", "[]").unwrap();
        }

        let reopened = KvDb::open(&path).unwrap();
        assert_eq!(reopened.get("quotes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_default_durable_path_honours_data_dir() {
        let path = KvDb::default_durable_path(Some(Path::new("/srv/quotes")));
        assert_eq!(path, PathBuf::from("/srv/quotes/quotes.db"));
    }
}
