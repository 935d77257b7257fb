//! Continuity agent: a troubleshooting knowledge store that learns answers
//! from Gemini.
//!
//! The `continuity` binary is a thin CLI over [`open_store`] and
//! [`build_resolver`]; embedders can use the same helpers or reach into the
//! member crates below.

/// Config schema and loading.
pub use continuity_config as config;
/// Query resolution and language model clients.
pub use continuity_core as core;
/// Knowledge records and the file store.
pub use continuity_memory as memory;
/// HTTP routes and the serve loop.
pub use continuity_server as server;

mod bootstrap;

pub use bootstrap::{build_resolver, open_store};

/// Route `log` output to stderr, filtered by `RUST_LOG` or `info` when unset.
///
/// Without the `logging` feature this does nothing. Repeated calls are
/// harmless.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let env = env_logger::Env::default().default_filter_or("info");
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
