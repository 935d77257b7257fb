//! Test helpers shared across Continuity crates.

pub mod llm;
pub mod memory;

pub use llm::{FailingLLM, FixedLLM, RecordingLLM, SlowLLM};
pub use memory::{FailingStore, InMemoryStore};
