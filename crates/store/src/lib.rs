//! Question/response store.
//!
//! Holds the [`Record`] type, the [`QaStore`] trait with its substring
//! lookup rule, and two backends: [`SqliteStore`] for persistence and
//! [`MemoryStore`] for tests.

pub mod matching;
pub mod memory;
pub mod seed;
pub mod sqlite;
pub mod store;
pub mod types;


// Re-export commonly used types
pub use memory::MemoryStore;
pub use seed::SEED_RECORDS;
pub use sqlite::SqliteStore;
pub use store::QaStore;
pub use types::{Record, FALLBACK_RESPONSE};
