//! The lookup rule shared by every store.
//!
//! A record matches when its question contains the query verbatim:
//! case-sensitive, no normalization, no tokenization. The empty query
//! matches everything. Among several matches the first in storage order
//! (ascending id) wins.

use crate::types::Record;

/// Whether `question` contains `query` as a substring.
pub fn is_match(question: &str, query: &str) -> bool {
    question.contains(query)
}

/// First record in slice order whose question contains `query`.
pub fn first_match<'a>(records: &'a [Record], query: &str) -> Option<&'a Record> {
    records.iter().find(|r| is_match(&r.question, query))
}
