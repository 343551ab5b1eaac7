//! # Utility Modules
//!
//! Supporting utilities for the framing core.
//!
//! ## Components
//! - **Logging**: Structured logging configuration

pub mod logging;
