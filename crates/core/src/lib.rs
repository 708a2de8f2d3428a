//! Faqbot Core Library
//!
//! Foundational utilities shared by the faqbot crates:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, SeedPolicy};
pub use error::{AppError, AppResult};
