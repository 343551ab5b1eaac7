//! # Fragment Assembler
//!
//! Reassembly of complete frames from transport deliveries.
//!
//! The transport hands over byte chunks with no alignment guarantee: a
//! chunk may carry part of a length prefix, the middle of a body, or the
//! tail of one message glued to the head of the next (pipelining). The
//! assembler accumulates those chunks, tracks the declared length of the
//! message currently in flight, and once complete either materializes a
//! [`MessageFrame`] (`graduate`) or shifts to the next message already
//! sitting in its buffer (`next_message`).
//!
//! One assembler corresponds to one logical inbound stream and must be
//! driven by a single sequential caller. Cancelling an in-flight assembly
//! is simply dropping the assembler.

use crate::config::MAX_FRAME_SIZE;
use crate::core::codec::{self, MSG_SIZE_LEN};
use crate::core::frame::{MessageFrame, Padding};
use crate::error::{FramingError, Result};
use bytes::{Buf, BytesMut};
use tracing::{debug, trace, warn};

/// Reassembles length-prefixed messages from arbitrarily split chunks.
///
/// The internal buffer holds exactly the bytes received so far, starting
/// with the current message's 4-byte prefix. Transport padding never enters
/// the assembler.
#[derive(Debug)]
pub struct FragmentAssembler {
    raw: BytesMut,
    announced_length: u32,
    padding: Padding,
    max_frame_size: usize,
}

impl FragmentAssembler {
    /// Start an assembly session from the first delivered chunk.
    ///
    /// The chunk must contain at least the 4-byte length prefix; anything
    /// shorter is a protocol violation (`TruncatedHeader`). A declared
    /// length above the default limit is rejected as `OversizedFrame`.
    pub fn new(initial_chunk: &[u8], padding: Padding) -> Result<Self> {
        Self::with_max_frame_size(initial_chunk, padding, MAX_FRAME_SIZE)
    }

    /// Like [`new`](Self::new) with a caller-chosen declared-length limit.
    pub fn with_max_frame_size(
        initial_chunk: &[u8],
        padding: Padding,
        max_frame_size: usize,
    ) -> Result<Self> {
        let announced_length = codec::decode_msg_size(initial_chunk)?;
        Self::check_limit(announced_length, max_frame_size)?;

        debug!(announced_length, chunk_len = initial_chunk.len(), "assembly started");

        Ok(Self {
            raw: BytesMut::from(initial_chunk),
            announced_length,
            padding,
            max_frame_size,
        })
    }

    fn check_limit(announced: u32, limit: usize) -> Result<()> {
        if announced as usize > limit {
            warn!(declared = announced, limit, "declared length exceeds limit");
            return Err(FramingError::OversizedFrame {
                declared: announced as usize,
                limit,
            });
        }
        Ok(())
    }

    /// Bytes on the wire for the current message: prefix plus body.
    #[inline]
    fn wire_len(&self) -> usize {
        self.announced_length as usize + MSG_SIZE_LEN
    }

    /// Append a delivered chunk. The announced length was fixed when the
    /// current message's prefix arrived and is not re-read here.
    pub fn append(&mut self, chunk: &[u8]) {
        self.raw.extend_from_slice(chunk);
        trace!(chunk_len = chunk.len(), buffered = self.raw.len(), "chunk appended");
    }

    /// Whether the current message's announced byte count has arrived.
    ///
    /// Greater-or-equal on purpose: a single chunk may deliver the tail of
    /// this message together with the start of the next.
    pub fn is_complete(&self) -> bool {
        self.raw.len() >= self.wire_len()
    }

    /// Advance to the next message already present in the buffer.
    ///
    /// Discards the current message's prefix and body, then re-decodes the
    /// announced length from the bytes that remain. Returns `Ok(false)` and
    /// leaves the assembler untouched when nothing follows the current
    /// message. Trailing bytes too short to hold a prefix are a protocol
    /// violation, reported before any state changes.
    pub fn next_message(&mut self) -> Result<bool> {
        let wire_len = self.wire_len();
        if self.raw.len() < wire_len {
            return Err(FramingError::NotComplete {
                have: self.raw.len(),
                need: wire_len,
            });
        }
        if self.raw.len() == wire_len {
            trace!("no trailing bytes, nothing to advance to");
            return Ok(false);
        }

        let next_announced = codec::decode_msg_size(&self.raw[wire_len..])?;
        Self::check_limit(next_announced, self.max_frame_size)?;

        self.raw.advance(wire_len);
        self.announced_length = next_announced;

        debug!(announced_length = next_announced, buffered = self.raw.len(), "advanced to next message");

        Ok(true)
    }

    /// Materialize the assembled message as an independent frame.
    ///
    /// Rejects the call with `NotComplete` while bytes are still missing;
    /// a truncated frame is never returned. The produced frame owns its
    /// buffer and outlives the assembler.
    pub fn graduate(&self) -> Result<MessageFrame> {
        if !self.is_complete() {
            return Err(FramingError::NotComplete {
                have: self.raw.len(),
                need: self.wire_len(),
            });
        }

        let body = &self.raw[MSG_SIZE_LEN..self.wire_len()];

        Ok(MessageFrame::from_body(body, self.padding))
    }

    /// Declared body length of the message currently being assembled.
    pub fn completed_size(&self) -> u32 {
        self.announced_length
    }

    /// Bytes buffered so far, across the current message and any trailing
    /// pipelined data.
    pub fn buffer_size(&self) -> usize {
        self.raw.len()
    }

    /// Diagnostic view of the accumulated bytes. Mutating the underlying
    /// stream outside the assembler's own methods is unsupported.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}
