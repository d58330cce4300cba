//! Logging configuration.
//!
//! The filter directive comes from, in order: an explicit argument,
//! `MYLIB_LOG`, `RUST_LOG`, and finally [`DEFAULT_FILTER`].

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable read before `RUST_LOG`
pub const LOG_ENV: &str = "MYLIB_LOG";

/// Filter used when nothing else is configured
pub const DEFAULT_FILTER: &str = "warn";

/// Resolved logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
}

impl LogConfig {
    /// Resolve settings against the process environment.
    pub fn resolve(explicit: Option<&str>) -> Self {
        Self::resolve_with(explicit, |key| std::env::var(key).ok())
    }

    /// Resolve settings using `lookup` in place of the environment.
    pub fn resolve_with<F>(explicit: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let filter = explicit
            .map(str::to_owned)
            .or_else(|| lookup(LOG_ENV))
            .or_else(|| lookup("RUST_LOG"))
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned());
        LogConfig { filter }
    }

    /// Install a global `fmt` subscriber writing to stderr.
    ///
    /// Returns `Ok(false)` when a global subscriber is already set.
    pub fn install(&self) -> Result<bool, tracing_subscriber::filter::ParseError> {
        let filter = EnvFilter::try_new(&self.filter)?;
        Ok(tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok())
    }
}

/// Install logging at import time when `MYLIB_LOG` is set.
pub fn init_from_env() {
    if std::env::var_os(LOG_ENV).is_none() {
        return;
    }
    let config = LogConfig::resolve(None);
    if let Err(err) = config.install() {
        // Nothing is listening yet, so stderr is the only place to say so.
        eprintln!("mylib: ignoring {LOG_ENV}={:?}: {err}", config.filter);
    }
}

/// Enable `tracing` output on stderr.
///
/// # Arguments
/// * `filter` - An `EnvFilter` directive such as `"mylib_core=debug"`;
///   defaults to `MYLIB_LOG`, then `RUST_LOG`, then `"warn"`
///
/// # Returns
/// `True` if logging was installed by this call, `False` if it was already
/// active.
///
/// # Raises
/// * `ValueError` - If the directive cannot be parsed
#[pyfunction]
#[pyo3(signature = (filter=None))]
pub fn init_logging(filter: Option<&str>) -> PyResult<bool> {
    let config = LogConfig::resolve(filter);
    config
        .install()
        .map_err(|e| PyValueError::new_err(format!("invalid log filter {:?}: {e}", config.filter)))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}
