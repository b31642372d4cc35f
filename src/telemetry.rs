//! Opt-in `tracing` setup for hosts embedding `chart-trendline`.
//!
//! The library only emits events. Hosts that already run a subscriber need
//! nothing from here; everyone else can call [`init_default_tracing`].

/// Filter used when `RUST_LOG` is unset: warnings from everything, plus
/// per-dataset skip reasons from this crate.
pub const DEFAULT_FILTER: &str = "warn,chart_trendline=debug";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"chart_trendline=trace"` to see every fitted line.
#[must_use]
pub fn init_tracing_with_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_directive));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
