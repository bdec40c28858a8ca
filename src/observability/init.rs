//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Output
///
/// With `config.log_file` set, log lines go to that file through a rotating
/// [`FileWriter`]; if its directory cannot be created, logging stays off.
/// Otherwise lines go to stderr.
///
/// Safe to call more than once; only the first call takes effect.
///
/// # Example
///
/// ```rust
/// use docindex::observability::init_tracing;
/// use docindex::Config;
///
/// init_tracing(&Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// });
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    let Some(log_file) = &config.log_file else {
        let _ = registry.with(fmt::layer().with_writer(std::io::stderr)).try_init();
        return;
    };

    if let Some(parent) = log_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let writer = FileWriter::new(log_file.clone());
    let _ = registry
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init();
}
