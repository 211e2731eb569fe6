//! Tracing setup for the harness binary.
//!
//! Standard output carries the scenario report lines, so logs go to stderr.
//! The filter comes from `GATHER_LOG`, then `RUST_LOG`, then `warn`.

use std::env;
use std::io;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV_VAR: &str = "GATHER_LOG";
pub const DEFAULT_DIRECTIVE: &str = "warn";

pub fn init() {
    let raw = env::var(LOG_ENV_VAR)
        .or_else(|_| env::var(EnvFilter::DEFAULT_ENV))
        .ok();
    let (env_filter, rejected) = filter_from_directive(raw.as_deref());

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();

    if let Some(directive) = rejected {
        tracing::warn!(%directive, "Ignoring unparseable log filter");
    }
}

/// Parse a filter directive, falling back to [`DEFAULT_DIRECTIVE`].
///
/// Returns the rejected directive alongside the fallback so it can be
/// reported once logging is up.
#[must_use]
pub fn filter_from_directive(raw: Option<&str>) -> (EnvFilter, Option<String>) {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return (EnvFilter::new(DEFAULT_DIRECTIVE), None);
    };

    match EnvFilter::try_new(raw) {
        Ok(filter) => (filter, None),
        Err(_) => (EnvFilter::new(DEFAULT_DIRECTIVE), Some(raw.to_string())),
    }
}
