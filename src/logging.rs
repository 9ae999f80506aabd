//! Console logging through `tracing`.

use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used
/// (e.g. `"info"`, or `"planes=trace"` to see the per-frame entity count).
/// Returns whether this call installed it.  A later call leaves the first
/// subscriber in place and reports the refusal through it.
pub fn init_logging(default_filter: &str) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    match tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            debug!(%err, "logging already initialised");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_refused() {
        init_logging(DEFAULT_FILTER);
        assert!(!init_logging("trace"));
    }
}
