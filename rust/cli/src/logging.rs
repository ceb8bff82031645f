//! Tracing setup for the `pokersum` binary.

use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging();
        init_logging();
        tracing::debug!("still fine");
    }
}
