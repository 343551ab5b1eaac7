//! # message-framing
//!
//! Length-prefixed binary message framing core for streaming transports.
//!
//! The crate does two things:
//! - wraps an application payload into a transport-ready frame
//!   (`[pre-padding][length(4, BE)][body][post-padding]`), optionally
//!   reserving padding regions for transport libraries that write in place;
//! - reassembles whole frames from deliveries that arrive split at
//!   arbitrary byte boundaries or merged with subsequent frames.
//!
//! Socket I/O, handshakes, TLS, and event loops are external collaborators;
//! this crate only moves bytes between the transport boundary and framed
//! messages. Everything is synchronous and single-threaded by design.
//!
//! ## Example
//! ```
//! use message_framing::{FragmentAssembler, MessageFrame, Padding};
//!
//! // Outbound: wrap a payload, hand the wire bytes to the transport.
//! let frame = MessageFrame::from_body(b"hello", Padding::NONE);
//! let wire = frame.as_wire_bytes().to_vec();
//!
//! // Inbound: feed delivered chunks until the frame is whole.
//! let mut asm = FragmentAssembler::new(&wire[..6], Padding::NONE)
//!     .expect("chunk carries the length prefix");
//! asm.append(&wire[6..]);
//! assert!(asm.is_complete());
//! assert_eq!(asm.graduate().unwrap().body(), b"hello");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::FramingConfig;
pub use crate::core::assembler::FragmentAssembler;
pub use crate::core::codec::{decode_msg_size, encode_msg_size, MSG_SIZE_LEN};
pub use crate::core::frame::{MessageFrame, Padding};
pub use crate::error::{FramingError, Result};
