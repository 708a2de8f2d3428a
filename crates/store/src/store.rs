//! Store trait implemented by the SQLite and in-memory backends.

use crate::seed::seed_pairs;
use crate::types::{Record, FALLBACK_RESPONSE};
use faqbot_core::{AppResult, SeedPolicy};

/// Durable, append-only collection of question/response records.
///
/// Records are never updated or removed. Every method is a self-contained
/// operation; implementations hold no open transaction between calls.
pub trait QaStore: std::fmt::Debug {
    /// Create the backing table if it does not exist yet.
    fn ensure_schema(&self) -> AppResult<()> {
        Ok(())
    }

    /// Insert one record and return its assigned id.
    ///
    /// Fails with `AppError::Validation` when either field is empty.
    fn append(&self, question: &str, response: &str) -> AppResult<i64>;

    /// Insert every pair or none of them. Returns the number inserted.
    fn append_all(&self, pairs: &[(String, String)]) -> AppResult<usize>;

    /// First record, in ascending id order, whose question contains `query`.
    fn lookup(&self, query: &str) -> AppResult<Option<Record>>;

    /// All records in ascending id order.
    fn records(&self) -> AppResult<Vec<Record>>;

    /// Number of stored records.
    fn count(&self) -> AppResult<usize>;

    /// Prepare the table and write the seed set according to `policy`.
    ///
    /// Returns how many seed records were inserted.
    fn initialize(&self, policy: SeedPolicy) -> AppResult<usize> {
        self.ensure_schema()?;

        let should_seed = match policy {
            SeedPolicy::Always => true,
            SeedPolicy::Never => false,
            SeedPolicy::IfEmpty => self.count()? == 0,
        };

        if !should_seed {
            tracing::debug!("Skipping seed records (policy: {})", policy);
            return Ok(0);
        }

        let inserted = self.append_all(&seed_pairs())?;
        tracing::info!("Inserted {} seed records", inserted);
        Ok(inserted)
    }

    /// Response of the best match for `query`, or the fallback answer.
    fn find_best_match(&self, query: &str) -> AppResult<String> {
        match self.lookup(query)? {
            Some(record) => {
                tracing::debug!("Query matched record {}", record.id);
                Ok(record.response)
            }
            None => {
                tracing::debug!("No record matched query");
                Ok(FALLBACK_RESPONSE.to_string())
            }
        }
    }
}
