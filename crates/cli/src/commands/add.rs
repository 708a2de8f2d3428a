//! Add command handler.
//!
//! Admin insert of a single question/response pair.

use anyhow::bail;
use clap::Args;
use faqbot_store::QaStore;

pub const MISSING_FIELDS_MESSAGE: &str = "Both question and response fields are required.";

/// Add a question/response pair
#[derive(Args, Debug)]
pub struct AddCommand {
    /// Question text
    #[arg(short, long)]
    pub question: Option<String>,

    /// Response text
    #[arg(short, long)]
    pub response: Option<String>,
}

impl AddCommand {
    pub fn execute(&self, store: &dyn QaStore) -> anyhow::Result<()> {
        tracing::info!("Executing add command");

        let (question, response) = match (self.question.as_deref(), self.response.as_deref()) {
            (Some(q), Some(r)) if !q.is_empty() && !r.is_empty() => (q, r),
            _ => bail!(MISSING_FIELDS_MESSAGE),
        };

        let id = store.append(question, response)?;
        tracing::debug!("Added record {}", id);
        println!("New Q&A added successfully!");

        Ok(())
    }
}
