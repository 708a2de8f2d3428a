//! Chat command handler.
//!
//! Interactive question loop over stdin.

use clap::Args;
use faqbot_store::QaStore;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Type your question here: ";

/// Ask questions interactively until EOF or `exit`
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Hide the input prompt (useful when piping questions in)
    #[arg(long)]
    pub quiet: bool,
}

impl ChatCommand {
    pub fn execute(&self, store: &dyn QaStore) -> anyhow::Result<()> {
        tracing::info!("Executing chat command");

        if !self.quiet {
            println!("Ask me a question and I will try to answer based on my database!");
        }

        let stdin = io::stdin();
        let stdout = io::stdout();
        let answered = run_session(store, stdin.lock(), stdout.lock(), !self.quiet)?;

        tracing::debug!("Chat session ended after {} questions", answered);
        Ok(())
    }
}

/// Answer each non-blank input line. Returns the number of questions answered.
pub fn run_session<R, W>(
    store: &dyn QaStore,
    input: R,
    mut output: W,
    show_prompt: bool,
) -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut answered = 0;
    let mut lines = input.lines();

    loop {
        if show_prompt {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let question = line.as_str();

        if question.trim().is_empty() {
            continue;
        }
        if matches!(question.trim(), "exit" | "quit") {
            break;
        }

        let response = store.find_best_match(question)?;
        writeln!(output, "Bot: {}", response)?;
        answered += 1;
    }

    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqbot_core::SeedPolicy;
    use faqbot_store::{MemoryStore, FALLBACK_RESPONSE};

    #[test]
    fn test_session_answers_each_line() {
        let store = MemoryStore::new();
        store.initialize(SeedPolicy::IfEmpty).unwrap();

        let input = "capital of France\n\nquantum computing\nexit\nWhat is AI?\n";
        let mut output = Vec::new();
        let answered = run_session(&store, input.as_bytes(), &mut output, false).unwrap();

        assert_eq!(answered, 2);
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Bot: The capital of France is Paris.".to_string(),
                format!("Bot: {}", FALLBACK_RESPONSE),
            ]
        );
    }

    #[test]
    fn test_session_shows_prompt() {
        let store = MemoryStore::new();
        let mut output = Vec::new();
        run_session(&store, "".as_bytes(), &mut output, true).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }
}
