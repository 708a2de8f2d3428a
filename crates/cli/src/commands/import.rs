//! Import command handler.
//!
//! Bulk-loads question/response rows from a spreadsheet.

use clap::Args;
use faqbot_core::config::AppConfig;
use faqbot_ingest::{import_file, ImportOptions};
use faqbot_store::QaStore;
use std::path::PathBuf;

/// Import pairs from a spreadsheet (.xlsx, .xls, .ods, .csv)
#[derive(Args, Debug)]
pub struct ImportCommand {
    /// Spreadsheet with `question` and `response` columns
    pub file: PathBuf,

    /// Commit all rows or none
    #[arg(long)]
    pub atomic: bool,
}

impl ImportCommand {
    pub fn execute(&self, store: &dyn QaStore, config: &AppConfig) -> anyhow::Result<()> {
        tracing::info!("Executing import command for {:?}", self.file);

        let options = ImportOptions {
            atomic: self.atomic || config.atomic_import,
        };
        let report = import_file(store, &self.file, options);

        if !report.is_success() {
            anyhow::bail!("{}", report);
        }

        println!("{}", report);
        Ok(())
    }
}
