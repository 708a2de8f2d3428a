//! Ask command handler.
//!
//! Looks up the best stored answer for a free-text question.

use clap::Args;
use faqbot_store::{QaStore, FALLBACK_RESPONSE};

/// Ask a question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// Question text; multiple words are joined with single spaces
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    pub fn execute(&self, store: &dyn QaStore) -> anyhow::Result<()> {
        let question = self.question.join(" ");
        tracing::info!("Executing ask command");
        tracing::debug!("Question: {:?}", question);

        if self.json {
            let output = json_answer(store, &question)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("Bot: {}", store.find_best_match(&question)?);
        }

        Ok(())
    }
}

/// `{question, matched, response}` for `--json` output.
fn json_answer(store: &dyn QaStore, question: &str) -> anyhow::Result<serde_json::Value> {
    let record = store.lookup(question)?;
    let matched = record.is_some();
    let response = record
        .map(|r| r.response)
        .unwrap_or_else(|| FALLBACK_RESPONSE.to_string());

    Ok(serde_json::json!({
        "question": question,
        "matched": matched,
        "response": response,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqbot_core::SeedPolicy;
    use faqbot_store::MemoryStore;

    #[test]
    fn test_json_answer_shape() {
        let store = MemoryStore::new();
        store.initialize(SeedPolicy::IfEmpty).unwrap();

        let hit = json_answer(&store, "capital of France").unwrap();
        assert_eq!(
            hit,
            serde_json::json!({
                "question": "capital of France",
                "matched": true,
                "response": "The capital of France is Paris.",
            })
        );

        let miss = json_answer(&store, "quantum computing").unwrap();
        assert_eq!(miss["matched"], false);
        assert_eq!(miss["response"], FALLBACK_RESPONSE);
        assert_eq!(miss.as_object().unwrap().len(), 3);
    }
}
