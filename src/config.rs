//! # Configuration Management
//!
//! Centralized configuration for the framing layer.
//!
//! This module provides structured configuration for deployments of the
//! framing core: transport padding reservations, frame size limits, and
//! logging options.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-specific overrides
//!
//! ## Security Considerations
//! - The declared-length limit (default 16 MB) bounds allocation before any
//!   payload bytes are accepted, preventing memory exhaustion from a hostile
//!   length prefix.

use crate::core::frame::Padding;
use crate::error::{FramingError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Max declared body size accepted by default (16 MB)
pub const MAX_FRAME_SIZE: usize = 16 * 1024 * 1024;

/// Main configuration structure that contains all configurable settings
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct FramingConfig {
    /// Transport padding reservations
    #[serde(default)]
    pub padding: PaddingConfig,

    /// Frame size limits
    #[serde(default)]
    pub limits: FramingLimits,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FramingConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| FramingError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| FramingError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| FramingError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Start with defaults
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(pre) = std::env::var("MESSAGE_FRAMING_PRE_PADDING") {
            if let Ok(val) = pre.parse::<usize>() {
                config.padding.pre = val;
            }
        }

        if let Ok(post) = std::env::var("MESSAGE_FRAMING_POST_PADDING") {
            if let Ok(val) = post.parse::<usize>() {
                config.padding.post = val;
            }
        }

        if let Ok(max) = std::env::var("MESSAGE_FRAMING_MAX_FRAME_SIZE") {
            if let Ok(val) = max.parse::<usize>() {
                config.limits.max_frame_size = val;
            }
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FramingError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| FramingError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        errors.extend(self.padding.validate());
        errors.extend(self.limits.validate());
        errors.extend(self.logging.validate());

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FramingError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Transport padding reservations.
///
/// Some transport libraries require the application to reserve writable
/// scratch space before and after the bytes it hands to the write primitive.
/// These values are deployment configuration, never part of the wire
/// protocol, and are excluded from the encoded length.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PaddingConfig {
    /// Bytes reserved before the length prefix
    #[serde(default)]
    pub pre: usize,

    /// Bytes reserved after the body
    #[serde(default)]
    pub post: usize,
}

impl PaddingConfig {
    /// Validate padding configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.pre > 4096 {
            errors.push(format!(
                "Pre-padding very large: {} bytes (transport conventions are typically < 64)",
                self.pre
            ));
        }

        if self.post > 4096 {
            errors.push(format!(
                "Post-padding very large: {} bytes (transport conventions are typically < 64)",
                self.post
            ));
        }

        errors
    }

    /// The padding value carried by frames built under this configuration
    pub fn as_padding(&self) -> Padding {
        Padding {
            pre: self.pre,
            post: self.post,
        }
    }
}

/// Frame size limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FramingLimits {
    /// Maximum declared body size accepted from a peer, in bytes
    pub max_frame_size: usize,
}

impl Default for FramingLimits {
    fn default() -> Self {
        Self {
            max_frame_size: MAX_FRAME_SIZE,
        }
    }
}

impl FramingLimits {
    /// Validate limit configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_frame_size == 0 {
            errors.push("Max frame size cannot be 0".to_string());
        } else if self.max_frame_size > u32::MAX as usize {
            errors.push(format!(
                "Max frame size exceeds what a 4-byte length prefix can declare: {}",
                self.max_frame_size
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to log to console
    pub log_to_console: bool,

    /// Whether to log to file
    pub log_to_file: bool,

    /// Path to log file (if log_to_file is true)
    pub log_file_path: Option<String>,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("message-framing"),
            log_level: Level::INFO,
            log_to_console: true,
            log_to_file: false,
            log_file_path: None,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        // Validate app name
        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        // Validate file logging configuration
        if self.log_to_file {
            if let Some(ref path) = self.log_file_path {
                // Check if parent directory exists (if path is absolute)
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        errors.push(format!(
                            "Log file directory does not exist: {}",
                            parent.display()
                        ));
                    }
                }
            } else {
                errors.push("log_file_path must be specified when log_to_file is true".to_string());
            }
        }

        // Validate at least one output is enabled
        if !self.log_to_console && !self.log_to_file {
            errors
                .push("At least one logging output (console or file) must be enabled".to_string());
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
