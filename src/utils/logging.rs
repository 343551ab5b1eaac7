//! # Logging
//!
//! Structured logging setup driven by [`LoggingConfig`].
//!
//! Initializes a global `tracing` subscriber. Honors `RUST_LOG` when set,
//! falling back to the configured level. Initialization is idempotent from
//! the caller's perspective: a second call reports a `ConfigError` instead
//! of panicking, since embedding applications often install their own
//! subscriber first.

use crate::config::LoggingConfig;
use crate::error::{FramingError, Result};
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber according to `config`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    let init_err =
        |e: Box<dyn std::error::Error + Send + Sync>| {
            FramingError::ConfigError(format!("Failed to initialize logging: {e}"))
        };

    if config.log_to_file {
        let path = config.log_file_path.as_deref().ok_or_else(|| {
            FramingError::ConfigError(
                "log_file_path must be specified when log_to_file is true".to_string(),
            )
        })?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| FramingError::ConfigError(format!("Failed to open log file: {e}")))?;

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false);

        if config.json_format {
            builder.json().try_init().map_err(init_err)
        } else {
            builder.try_init().map_err(init_err)
        }
    } else {
        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        if config.json_format {
            builder.json().try_init().map_err(init_err)
        } else {
            builder.try_init().map_err(init_err)
        }
    }
}
