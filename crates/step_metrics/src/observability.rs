//! Log filter resolution and subscriber setup.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Resolve the log filter: `STEP_METRICS_LOG_LEVEL`, then `RUST_LOG`, then `info`.
pub fn log_filter_from_env_with<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get("STEP_METRICS_LOG_LEVEL")
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install a compact stderr subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let log_env = log_filter_from_env_with(|k| std::env::var(k).ok());
    let env_filter =
        EnvFilter::try_new(&log_env).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(%log_env, "step_metrics: log filter");
    }
}
