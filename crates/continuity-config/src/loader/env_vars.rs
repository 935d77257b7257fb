//! Environment variables that override config file values.

pub const HOST: &str = "CONTINUITY_HOST";
pub const PORT: &str = "CONTINUITY_PORT";
pub const MEMORY_PATH: &str = "CONTINUITY_MEMORY_PATH";
pub const MODEL: &str = "CONTINUITY_MODEL";
pub const PROVIDER_TIMEOUT_SECS: &str = "CONTINUITY_PROVIDER_TIMEOUT_SECS";
