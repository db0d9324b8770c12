//! Tracing and logging (shared setup).

/// Tracing configuration and subscriber installation.
pub mod tracing;

pub use self::tracing::{ConfigError, LogFormat, TracingConfig};

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> Result<(), ConfigError> {
    tracing::init(&TracingConfig::from_env()?);
    Ok(())
}
