//! Stats command handler.

use clap::Args;
use faqbot_core::config::AppConfig;
use faqbot_store::{QaStore, SqliteStore};

/// Show store statistics
#[derive(Args, Debug)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatsCommand {
    pub fn execute(
        &self,
        store: &dyn QaStore,
        config: &AppConfig,
        in_memory: bool,
    ) -> anyhow::Result<()> {
        tracing::info!("Executing stats command");

        let records = store.count()?;
        let (location, size_bytes) = database_summary(config, in_memory);

        if self.json {
            let output = serde_json::json!({
                "database": location,
                "records": records,
                "dbSizeBytes": size_bytes,
                "seedPolicy": config.seed.as_str(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("Database: {}", location);
            println!("  Records: {}", records);
            println!("  DB size: {} bytes", size_bytes);
            println!("  Seed policy: {}", config.seed);
        }

        Ok(())
    }
}

/// Database location for display and its size on disk.
fn database_summary(config: &AppConfig, in_memory: bool) -> (String, u64) {
    if in_memory {
        return ("(in memory)".to_string(), 0);
    }

    let db_path = config.resolved_db_path();
    let size_bytes = SqliteStore::new(&db_path).size_bytes();
    (db_path.display().to_string(), size_bytes)
}
