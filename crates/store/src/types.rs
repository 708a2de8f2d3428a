//! Record type and the invariants every store enforces on insert.

use faqbot_core::{AppError, AppResult};

/// Response returned when no stored question contains the query.
pub const FALLBACK_RESPONSE: &str = "I'm sorry, I don't have an answer for that.";

/// One stored question/response pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Auto-assigned, unique and stable once written
    pub id: i64,

    pub question: String,

    pub response: String,
}

/// Reject pairs that would break the non-empty invariant.
pub fn validate_pair(question: &str, response: &str) -> AppResult<()> {
    if question.is_empty() {
        return Err(AppError::Validation("question must not be empty".to_string()));
    }
    if response.is_empty() {
        return Err(AppError::Validation("response must not be empty".to_string()));
    }
    Ok(())
}
