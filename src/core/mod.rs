//! # Core Framing Components
//!
//! Length-prefixed frame construction and reassembly.
//!
//! This module provides the foundation of the crate: the wire codec for the
//! length prefix, the frame type handed to the transport's write primitive,
//! and the assembler that rebuilds frames from arbitrarily split deliveries.
//!
//! ## Components
//! - **Codec**: big-endian length-prefix encode/decode helpers
//! - **MessageFrame**: padded, length-prefixed message buffer with a seek cursor
//! - **FragmentAssembler**: reassembly of frames from transport chunks
//!
//! ## Wire Format
//! ```text
//! [PrePad(P1)] [Length(4, big-endian)] [Body(N)] [PostPad(P2)]
//! ```
//!
//! ## Security
//! - Declared length validated against a configurable limit before allocation
//! - All buffer access is bounds-checked slicing

pub mod assembler;
pub mod codec;
pub mod frame;
