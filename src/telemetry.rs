//! Opt-in log subscriber setup for the sweep and debug binaries.
//!
//! Library code only emits `tracing` events (search probes at `trace`,
//! per-sample timings at `debug`). Nothing is printed until a subscriber is
//! installed, either by `init_default_tracing` or by the embedding host.
//! Log output goes to stderr so reports printed on stdout stay parseable.

/// Installs an fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Requires the `telemetry` feature; without it this is a no-op returning
/// `false`. Also returns `false` when a global subscriber is already set.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "info";

#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
