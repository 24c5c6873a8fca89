//! Session Interface - Explicit Application State
//!
//! The presentation layer (whatever renders the forms) owns exactly one
//! [`Session`] and drives every mutation through it. There are no
//! process-wide singletons; state lives in the struct, stores live on
//! disk, and the two never diverge thanks to save-or-rollback appends.
//!
//! Single-user by design: no locking, no concurrent writers.

pub mod config;
pub mod error;
pub mod session;

pub use config::SessionConfig;
pub use error::SessionError;
pub use session::Session;

use tracing_subscriber::EnvFilter;

/// Initializes tracing for a presentation layer or binary.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies.
/// Safe to call more than once.
pub fn init_tracing(config: &SessionConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok();
}
