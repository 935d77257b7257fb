//! Knowledge store for Continuity.
//!
//! Holds the issue/solution pairs the agent has been taught or has learned
//! from the language model, and answers substring lookups against them.

pub mod error;
pub mod model;
pub mod search;
pub mod store;

/// Memory error type.
pub use error::MemoryError;
/// Knowledge record model.
pub use model::MemoryRecord;
/// Newest-first substring lookup.
pub use search::find_newest_match;
/// Knowledge store interface and default file implementation.
pub use store::{FileKnowledgeStore, KnowledgeStore};
