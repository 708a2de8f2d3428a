//! Command handlers for the faqbot CLI.
//!
//! Each subcommand lives in its own submodule.

pub mod add;
pub mod ask;
pub mod chat;
pub mod import;
pub mod stats;
pub mod template;

// Re-export command types for convenience
pub use add::AddCommand;
pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use import::ImportCommand;
pub use stats::StatsCommand;
pub use template::TemplateCommand;
