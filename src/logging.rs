//! Opt-in tracing setup for embedding hosts. The library only emits
//! events; embedders that already install a subscriber should skip
//! this.

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "PLANT_NURSE_LOG";

/// Installs a fmt subscriber filtered by `PLANT_NURSE_LOG`, falling
/// back to `RUST_LOG`, then to `plant_nurse=info`. Calling this when a
/// subscriber is already installed is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("plant_nurse=info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
