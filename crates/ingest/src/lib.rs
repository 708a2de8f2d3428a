//! Bulk ingestion of question/response pairs from spreadsheets.
//!
//! Reads `.xlsx`/`.xls`/`.ods` workbooks and `.csv` files into a [`Table`],
//! checks for the `question` and `response` columns, and appends each row
//! to a [`faqbot_store::QaStore`]. Also writes the import template.

pub mod import;
pub mod reader;
pub mod table;
pub mod template;

// Re-export commonly used types
pub use import::{import_file, import_table, ImportOptions, ImportReport};
pub use reader::{read_table, SheetFormat};
pub use table::Table;
pub use template::write_template;
