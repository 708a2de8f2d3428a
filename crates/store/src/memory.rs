//! In-memory store for tests and throwaway sessions.

use crate::matching::first_match;
use crate::store::QaStore;
use crate::types::{validate_pair, Record};
use faqbot_core::{AppError, AppResult};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    records: Vec<Record>,
    next_id: i64,
}

/// Store that keeps records in a vector; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| AppError::Store("In-memory store lock poisoned".to_string()))
    }
}

impl Inner {
    fn push(&mut self, question: &str, response: &str) -> i64 {
        self.next_id += 1;
        let id = self.next_id;
        self.records.push(Record {
            id,
            question: question.to_string(),
            response: response.to_string(),
        });
        id
    }
}

impl QaStore for MemoryStore {
    fn append(&self, question: &str, response: &str) -> AppResult<i64> {
        validate_pair(question, response)?;
        Ok(self.lock()?.push(question, response))
    }

    fn append_all(&self, pairs: &[(String, String)]) -> AppResult<usize> {
        for (question, response) in pairs {
            validate_pair(question, response)?;
        }

        let mut inner = self.lock()?;
        for (question, response) in pairs {
            inner.push(question, response);
        }
        Ok(pairs.len())
    }

    fn lookup(&self, query: &str) -> AppResult<Option<Record>> {
        let inner = self.lock()?;
        Ok(first_match(&inner.records, query).cloned())
    }

    fn records(&self) -> AppResult<Vec<Record>> {
        Ok(self.lock()?.records.clone())
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.lock()?.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one() {
        let store = MemoryStore::new();
        assert_eq!(store.append("q1", "r1").unwrap(), 1);
        assert_eq!(store.append("q2", "r2").unwrap(), 2);
    }

    #[test]
    fn test_append_all_is_all_or_nothing() {
        let store = MemoryStore::new();
        let pairs = vec![
            ("q1".to_string(), "r1".to_string()),
            (String::new(), "r2".to_string()),
        ];
        assert!(store.append_all(&pairs).is_err());
        assert_eq!(store.count().unwrap(), 0);
    }
}
