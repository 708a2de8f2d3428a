//! Template command handler.

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Write the spreadsheet template for bulk import
#[derive(Args, Debug)]
pub struct TemplateCommand {
    /// Output path; a `.csv` extension writes CSV, anything else xlsx
    #[arg(short, long, default_value = "template.xlsx")]
    pub output: PathBuf,
}

impl TemplateCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        tracing::info!("Executing template command");

        faqbot_ingest::write_template(&self.output)
            .with_context(|| format!("Failed to write template to {}", self.output.display()))?;

        println!("Template written to {}", self.output.display());
        Ok(())
    }
}
