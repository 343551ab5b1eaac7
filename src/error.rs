//! # Error Types
//!
//! Error handling for the framing layer.
//!
//! This module defines all error variants that can occur while building
//! frames or reassembling them from transport deliveries, from truncated
//! length prefixes to caller contract violations.
//!
//! Out-of-range seeks are deliberately *not* errors: `MessageFrame::seek`
//! reports failure through its boolean return and leaves the cursor
//! untouched. Only protocol and contract violations surface here, and no
//! variant is ever silently recovered from; the caller decides whether
//! the connection survives.
//!
//! All errors implement `std::error::Error` for interoperability.

use std::io;
use thiserror::Error;

/// FramingError is the primary error type for all framing operations
#[derive(Error, Debug)]
pub enum FramingError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A length prefix was expected but fewer than 4 bytes were available.
    /// Constructing an assembler from such a chunk is a protocol violation.
    #[error("truncated length prefix: got {got} bytes, need {need}")]
    TruncatedHeader { got: usize, need: usize },

    /// `graduate()` was called before the announced byte count arrived.
    #[error("message not complete: have {have} of {need} bytes")]
    NotComplete { have: usize, need: usize },

    /// The declared body length exceeds the configured maximum.
    #[error("frame too large: declared {declared} bytes (limit {limit})")]
    OversizedFrame { declared: usize, limit: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using FramingError
pub type Result<T> = std::result::Result<T, FramingError>;
