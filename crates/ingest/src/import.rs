//! Bulk import of question/response rows into a store.

use crate::reader::read_table;
use crate::table::Table;
use faqbot_core::AppResult;
use faqbot_store::QaStore;
use std::fmt;
use std::path::Path;

/// Header naming the question column.
pub const QUESTION_COLUMN: &str = "question";

/// Header naming the response column.
pub const RESPONSE_COLUMN: &str = "response";

pub const SUCCESS_MESSAGE: &str = "Data uploaded successfully!";

pub const INVALID_FORMAT_MESSAGE: &str = "Invalid file format. Please use the provided template.";

/// Options controlling how rows are committed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Commit all rows in one transaction. When false, rows are written one
    /// by one and a failure keeps every row inserted before it.
    pub atomic: bool,
}

/// Outcome of a bulk import. `Display` yields the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportReport {
    /// Every row was written.
    Imported { rows: usize },
    /// A required column is missing; nothing was written.
    InvalidFormat,
    /// Reading or inserting failed. Without `atomic`, rows before the
    /// failing one remain in the store.
    Failed { message: String },
}

impl ImportReport {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Imported { .. })
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imported { .. } => f.write_str(SUCCESS_MESSAGE),
            Self::InvalidFormat => f.write_str(INVALID_FORMAT_MESSAGE),
            Self::Failed { message } => write!(f, "An error occurred: {}", message),
        }
    }
}

/// Validate the table shape and append its rows to `store` in order.
///
/// Rows are not validated here; an empty cell reaches the store as an
/// empty string and the store's own error ends the import.
pub fn import_table(store: &dyn QaStore, table: &Table, options: ImportOptions) -> ImportReport {
    let (Some(question_col), Some(response_col)) =
        (table.column(QUESTION_COLUMN), table.column(RESPONSE_COLUMN))
    else {
        tracing::warn!(
            "Rejected import: expected columns '{}' and '{}', found {:?}",
            QUESTION_COLUMN,
            RESPONSE_COLUMN,
            table.headers
        );
        return ImportReport::InvalidFormat;
    };

    match write_rows(store, table, question_col, response_col, options) {
        Ok(rows) => {
            tracing::info!("Imported {} records", rows);
            ImportReport::Imported { rows }
        }
        Err(e) => {
            tracing::warn!("Import failed: {}", e);
            ImportReport::Failed {
                message: e.to_string(),
            }
        }
    }
}

/// Read the spreadsheet at `path` and import it.
pub fn import_file(store: &dyn QaStore, path: &Path, options: ImportOptions) -> ImportReport {
    match read_table(path) {
        Ok(table) => import_table(store, &table, options),
        Err(e) => {
            tracing::warn!("Failed to read {:?}: {}", path, e);
            ImportReport::Failed {
                message: e.to_string(),
            }
        }
    }
}

fn write_rows(
    store: &dyn QaStore,
    table: &Table,
    question_col: usize,
    response_col: usize,
    options: ImportOptions,
) -> AppResult<usize> {
    let pairs = (0..table.len()).map(|row| {
        (
            table.cell(row, question_col).unwrap_or_default().to_string(),
            table.cell(row, response_col).unwrap_or_default().to_string(),
        )
    });

    if options.atomic {
        let pairs: Vec<(String, String)> = pairs.collect();
        return store.append_all(&pairs);
    }

    let mut written = 0;
    for (question, response) in pairs {
        store.append(&question, &response)?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqbot_core::SeedPolicy;
    use faqbot_store::{MemoryStore, SqliteStore, FALLBACK_RESPONSE};
    use tempfile::TempDir;

    fn faq_table(rows: &[(&str, &str)]) -> Table {
        let mut table = Table::new(vec!["question".into(), "response".into()]);
        for (q, r) in rows {
            table.push_row([*q, *r]);
        }
        table
    }

    #[test]
    fn test_two_rows_are_retrievable() {
        let store = MemoryStore::new();
        store.initialize(SeedPolicy::IfEmpty).unwrap();

        let table = faq_table(&[
            ("What is Cargo?", "Rust's package manager."),
            ("What is rustup?", "The Rust toolchain installer."),
        ]);
        let report = import_table(&store, &table, ImportOptions::default());

        assert_eq!(report, ImportReport::Imported { rows: 2 });
        assert_eq!(report.to_string(), SUCCESS_MESSAGE);
        assert_eq!(store.count().unwrap(), 7);
        assert_eq!(
            store.find_best_match("What is Cargo?").unwrap(),
            "Rust's package manager."
        );
        assert_eq!(
            store.find_best_match("What is rustup?").unwrap(),
            "The Rust toolchain installer."
        );
    }

    #[test]
    fn test_missing_response_column_leaves_store_unchanged() {
        let store = MemoryStore::new();
        store.initialize(SeedPolicy::IfEmpty).unwrap();

        let mut table = Table::new(vec!["question".into(), "answer".into()]);
        table.push_row(["What is Cargo?", "Rust's package manager."]);

        let report = import_table(&store, &table, ImportOptions::default());
        assert_eq!(report, ImportReport::InvalidFormat);
        assert_eq!(report.to_string(), INVALID_FORMAT_MESSAGE);
        assert_eq!(store.count().unwrap(), 5);
        assert_eq!(store.find_best_match("Cargo").unwrap(), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_extra_columns_and_order_ignored() {
        let store = MemoryStore::new();
        let mut table = Table::new(vec!["id".into(), "response".into(), "question".into()]);
        table.push_row(["1", "Blue.", "What color is the sky?"]);

        let report = import_table(&store, &table, ImportOptions::default());
        assert!(report.is_success());

        let records = store.records().unwrap();
        assert_eq!(records[0].question, "What color is the sky?");
        assert_eq!(records[0].response, "Blue.");
    }

    #[test]
    fn test_header_only_table_imports_nothing() {
        let store = MemoryStore::new();
        let table = faq_table(&[]);
        assert_eq!(
            import_table(&store, &table, ImportOptions::default()),
            ImportReport::Imported { rows: 0 }
        );
    }

    #[test]
    fn test_failure_keeps_earlier_rows() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::new(dir.path().join("chatbot.db"));
        store.initialize(SeedPolicy::Never).unwrap();

        let table = faq_table(&[("q1", "r1"), ("q2", ""), ("q3", "r3")]);
        let report = import_table(&store, &table, ImportOptions::default());

        assert!(!report.is_success());
        assert!(report.to_string().starts_with("An error occurred: "));
        // Row 1 committed before row 2 failed; row 3 never ran.
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.find_best_match("q1").unwrap(), "r1");
        assert_eq!(store.find_best_match("q3").unwrap(), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_atomic_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::new(dir.path().join("chatbot.db"));
        store.initialize(SeedPolicy::Never).unwrap();

        let table = faq_table(&[("q1", "r1"), ("", "r2")]);
        let report = import_table(&store, &table, ImportOptions { atomic: true });

        assert!(matches!(report, ImportReport::Failed { .. }));
        assert_eq!(store.count().unwrap(), 0);

        let table = faq_table(&[("q1", "r1"), ("q2", "r2")]);
        let report = import_table(&store, &table, ImportOptions { atomic: true });
        assert_eq!(report, ImportReport::Imported { rows: 2 });
    }

    #[test]
    fn test_missing_cell_surfaces_store_error() {
        let store = MemoryStore::new();
        let mut table = Table::new(vec!["question".into(), "response".into()]);
        table.rows.push(vec![Some("Orphan question?".to_string()), None]);

        let report = import_table(&store, &table, ImportOptions::default());
        assert!(report.to_string().contains("response must not be empty"));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_import_file_reports_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let store = MemoryStore::new();

        let report = import_file(
            &store,
            &dir.path().join("missing.xlsx"),
            ImportOptions::default(),
        );
        assert!(report.to_string().starts_with("An error occurred: "));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_import_csv_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("faq.csv");
        std::fs::write(
            &path,
            "question,response\n\"Where is the office?\",\"Second floor, room 12.\"\n",
        )
        .unwrap();

        let store = MemoryStore::new();
        let report = import_file(&store, &path, ImportOptions::default());
        assert_eq!(report, ImportReport::Imported { rows: 1 });
        assert_eq!(
            store.find_best_match("office").unwrap(),
            "Second floor, room 12."
        );
    }
}
