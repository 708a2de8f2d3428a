//! SQLite-backed store.
//!
//! The handle only remembers the database path. Each operation opens its
//! own connection and drops it before returning.

use crate::store::QaStore;
use crate::types::{validate_pair, Record};
use faqbot_core::{AppError, AppResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS questions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question TEXT NOT NULL,
        response TEXT NOT NULL
    );
"#;

const INSERT: &str = "INSERT INTO questions (question, response) VALUES (?1, ?2)";

/// Store persisted in a single SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the database file on disk, zero if it does not exist yet.
    pub fn size_bytes(&self) -> u64 {
        std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
    }

    fn connect(&self) -> AppResult<Connection> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::Store(format!("Failed to create database directory: {}", e))
                })?;
            }
        }

        Connection::open(&self.path).map_err(|e| {
            AppError::Store(format!("Failed to open database {:?}: {}", self.path, e))
        })
    }
}

impl QaStore for SqliteStore {
    fn ensure_schema(&self) -> AppResult<()> {
        let conn = self.connect()?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| AppError::Store(format!("Failed to create table: {}", e)))?;

        tracing::debug!("Initialized SQLite store at {:?}", self.path);
        Ok(())
    }

    fn append(&self, question: &str, response: &str) -> AppResult<i64> {
        validate_pair(question, response)?;

        let conn = self.connect()?;
        conn.execute(INSERT, params![question, response])
            .map_err(|e| AppError::Store(format!("Failed to insert record: {}", e)))?;

        let id = conn.last_insert_rowid();
        tracing::debug!("Inserted record {}", id);
        Ok(id)
    }

    fn append_all(&self, pairs: &[(String, String)]) -> AppResult<usize> {
        let mut conn = self.connect()?;
        let tx = conn
            .transaction()
            .map_err(|e| AppError::Store(format!("Failed to begin transaction: {}", e)))?;

        // Any early return drops `tx`, which rolls the batch back.
        for (question, response) in pairs {
            validate_pair(question, response)?;
            tx.execute(INSERT, params![question, response])
                .map_err(|e| AppError::Store(format!("Failed to insert record: {}", e)))?;
        }

        tx.commit()
            .map_err(|e| AppError::Store(format!("Failed to commit batch: {}", e)))?;

        tracing::debug!("Inserted {} records in one transaction", pairs.len());
        Ok(pairs.len())
    }

    fn lookup(&self, query: &str) -> AppResult<Option<Record>> {
        let conn = self.connect()?;

        // instr() keeps the comparison case-sensitive and free of LIKE wildcards.
        conn.query_row(
            "SELECT id, question, response FROM questions
             WHERE ?1 = '' OR instr(question, ?1) > 0
             ORDER BY id
             LIMIT 1",
            params![query],
            row_to_record,
        )
        .optional()
        .map_err(|e| AppError::Store(format!("Failed to query records: {}", e)))
    }

    fn records(&self) -> AppResult<Vec<Record>> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare("SELECT id, question, response FROM questions ORDER BY id")
            .map_err(|e| AppError::Store(format!("Failed to prepare query: {}", e)))?;

        let rows = stmt
            .query_map([], row_to_record)
            .map_err(|e| AppError::Store(format!("Failed to list records: {}", e)))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::Store(format!("Failed to read record: {}", e)))
    }

    fn count(&self) -> AppResult<usize> {
        let conn = self.connect()?;
        conn.query_row("SELECT COUNT(*) FROM questions", [], |row| {
            row.get::<_, i64>(0).map(|v| v as usize)
        })
        .map_err(|e| AppError::Store(format!("Failed to count records: {}", e)))
    }
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        question: row.get(1)?,
        response: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FALLBACK_RESPONSE;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> SqliteStore {
        let store = SqliteStore::new(dir.path().join("chatbot.db"));
        store.ensure_schema().unwrap();
        store
    }

    #[test]
    fn test_ensure_schema_creates_table() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let conn = Connection::open(store.path()).unwrap();
        let table_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='questions'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 1);

        // Second call is a no-op
        store.ensure_schema().unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::new(dir.path().join("nested/deeper/chatbot.db"));
        store.ensure_schema().unwrap();
        assert!(store.path().exists());
        assert!(store.size_bytes() > 0);
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let first = store.append("What is Rust?", "A systems language.").unwrap();
        let second = store.append("What is Cargo?", "Rust's build tool.").unwrap();
        assert!(second > first);

        let records = store.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, first);
        assert_eq!(records[1].question, "What is Cargo?");
    }

    #[test]
    fn test_append_rejects_empty_fields() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert!(matches!(store.append("", "r"), Err(AppError::Validation(_))));
        assert!(matches!(store.append("q", ""), Err(AppError::Validation(_))));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_append_all_rolls_back_on_failure() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let pairs = vec![
            ("q1".to_string(), "r1".to_string()),
            ("q2".to_string(), String::new()),
            ("q3".to_string(), "r3".to_string()),
        ];
        assert!(store.append_all(&pairs).is_err());
        assert_eq!(store.count().unwrap(), 0);

        let pairs = vec![
            ("q1".to_string(), "r1".to_string()),
            ("q2".to_string(), "r2".to_string()),
        ];
        assert_eq!(store.append_all(&pairs).unwrap(), 2);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_lookup_is_case_sensitive_and_literal() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        store.append("What is SQLite?", "A database.").unwrap();
        store.append("Is 100% coverage useful?", "Rarely.").unwrap();

        assert!(store.lookup("sqlite").unwrap().is_none());
        assert!(store.lookup("What%SQLite").unwrap().is_none());
        assert!(store.lookup("What_is").unwrap().is_none());
        assert_eq!(store.find_best_match("100%").unwrap(), "Rarely.");
        assert_eq!(store.find_best_match("SQLite").unwrap(), "A database.");
    }

    #[test]
    fn test_lookup_returns_lowest_id() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        store.append("What is Rust?", "first").unwrap();
        store.append("What is Rust?", "second").unwrap();

        assert_eq!(store.find_best_match("Rust").unwrap(), "first");
        assert_eq!(store.find_best_match("").unwrap(), "first");
    }

    #[test]
    fn test_lookup_on_empty_table() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        assert_eq!(store.find_best_match("").unwrap(), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chatbot.db");
        {
            let store = SqliteStore::new(&path);
            store.ensure_schema().unwrap();
            store.append("Where is the config?", "In .faqbot/config.yaml").unwrap();
        }

        let reopened = SqliteStore::new(&path);
        assert_eq!(
            reopened.find_best_match("config").unwrap(),
            "In .faqbot/config.yaml"
        );
    }

    #[test]
    fn test_lookup_without_schema_fails() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::new(dir.path().join("chatbot.db"));
        assert!(matches!(store.lookup("x"), Err(AppError::Store(_))));
    }
}
