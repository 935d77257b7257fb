//! Knowledge record model used by stores.

use crate::error::MemoryError;
use serde::{Deserialize, Serialize};

/// A persisted issue/solution pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoryRecord {
    /// Problem description, matched case-insensitively against questions.
    pub issue: String,
    /// Stored or generated answer.
    pub solution: String,
}

impl MemoryRecord {
    /// Build a record from an issue and its solution.
    pub fn new(issue: impl Into<String>, solution: impl Into<String>) -> Self {
        Self {
            issue: issue.into(),
            solution: solution.into(),
        }
    }

    /// Reject records with a blank issue or solution.
    pub fn validate(&self) -> Result<(), MemoryError> {
        if self.issue.trim().is_empty() {
            return Err(MemoryError::InvalidRecord(
                "issue cannot be empty".to_string(),
            ));
        }
        if self.solution.trim().is_empty() {
            return Err(MemoryError::InvalidRecord(
                "solution cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
