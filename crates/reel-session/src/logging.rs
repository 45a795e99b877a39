//! Tracing setup for embedding applications.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Load `.env` and install a formatted tracing subscriber.
///
/// Idempotent: repeated calls (e.g. across tests) keep the first subscriber.
pub fn init_tracing() {
    dotenvy::dotenv().ok();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reel=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true).with_target(true))
        .with(env_filter)
        .try_init()
        .ok();
}
