//! # Message Frame
//!
//! One complete message as a transport-ready, length-prefixed buffer.
//!
//! The buffer layout is `[pre-padding][length(4, BE)][body][post-padding]`.
//! Padding regions are reserved scratch space for transport libraries that
//! write in place; they carry no semantic content, are always zero-filled at
//! construction, and are excluded from the encoded length.
//!
//! A seek cursor supports incremental consumption of the body. Checked
//! seeks (`seek`, `seek_forward`) fail with `false` past the end of the
//! body; the raw variants operate in full-buffer coordinates without bounds
//! checks for callers that address padding bytes directly.

use crate::core::codec::{self, MSG_SIZE_LEN};
use tracing::trace;

/// Transport padding reservation carried by a frame.
///
/// Deployment configuration, not a protocol constant. Peers never see or
/// interpret these regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    /// Bytes reserved before the length prefix
    pub pre: usize,
    /// Bytes reserved after the body
    pub post: usize,
}

impl Padding {
    /// No padding reservation (transports without an in-place convention)
    pub const NONE: Padding = Padding { pre: 0, post: 0 };

    /// Total reserved bytes
    pub fn total(&self) -> usize {
        self.pre + self.post
    }
}

/// A complete length-prefixed message, padded for the transport.
#[derive(Debug, Clone)]
pub struct MessageFrame {
    buffer: Vec<u8>,
    seek_offset: usize,
    padding: Padding,
}

impl MessageFrame {
    /// Build a frame around `body`, allocating the full padded layout.
    ///
    /// Padding and prefix regions are zero-filled before the length is
    /// encoded, so no allocation garbage ever reaches the wire.
    pub fn from_body(body: &[u8], padding: Padding) -> Self {
        let body_offset = padding.pre + MSG_SIZE_LEN;
        let mut buffer = vec![0u8; body_offset + body.len() + padding.post];

        buffer[padding.pre..body_offset].copy_from_slice(&codec::encode_msg_size(body.len() as u32));
        buffer[body_offset..body_offset + body.len()].copy_from_slice(body);

        trace!(body_len = body.len(), pre = padding.pre, post = padding.post, "frame built");

        Self {
            buffer,
            seek_offset: 0,
            padding,
        }
    }

    /// Adopt an already-laid-out buffer, e.g. one received from the
    /// transport. The length field is trusted as-is; no internal
    /// consistency check is performed. The buffer must satisfy the
    /// `[pre][length][body][post]` layout for `padding`.
    pub fn from_wire_buffer(buffer: Vec<u8>, padding: Padding) -> Self {
        Self {
            buffer,
            seek_offset: 0,
            padding,
        }
    }

    #[inline]
    fn body_offset(&self) -> usize {
        self.padding.pre + MSG_SIZE_LEN
    }

    /// The body region, excluding prefix and padding.
    pub fn body(&self) -> &[u8] {
        &self.buffer[self.body_offset()..self.buffer.len() - self.padding.post]
    }

    /// Mutable body region, for callers that fill a frame in place.
    pub fn body_mut(&mut self) -> &mut [u8] {
        let start = self.body_offset();
        let end = self.buffer.len() - self.padding.post;
        &mut self.buffer[start..end]
    }

    /// The body from the current cursor position to its end.
    pub fn seeked_body(&self) -> &[u8] {
        &self.body()[self.seek_offset..]
    }

    /// Mutable view of the body from the current cursor position.
    pub fn seeked_body_mut(&mut self) -> &mut [u8] {
        let offset = self.seek_offset;
        &mut self.body_mut()[offset..]
    }

    /// The full buffer from the cursor interpreted in raw (full-buffer)
    /// coordinates, padding included. Pairs with `raw_seek`.
    pub fn seeked_raw(&self) -> &[u8] {
        &self.buffer[self.seek_offset..]
    }

    /// Mutable raw view from the cursor, padding included.
    pub fn seeked_raw_mut(&mut self) -> &mut [u8] {
        &mut self.buffer[self.seek_offset..]
    }

    /// The authoritative body length, re-decoded from the length field on
    /// every call. Callers with raw access may have rewritten the field's
    /// backing bytes, so this is never cached.
    pub fn body_size(&self) -> u32 {
        let prefix = &self.buffer[self.padding.pre..self.body_offset()];
        u32::from_be_bytes(prefix.try_into().expect("prefix region is 4 bytes"))
    }

    /// Bytes of body remaining past the cursor.
    pub fn remaining_size(&self) -> u32 {
        self.body_size() - self.seek_offset as u32
    }

    /// Total buffer size, padding included.
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.seek_offset
    }

    /// The frame's padding reservation.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Move the cursor to `offset` within the body.
    ///
    /// Returns `false` and leaves the cursor unchanged when `offset` is at
    /// or past the end of the body. An empty body rejects every offset,
    /// including 0.
    pub fn seek(&mut self, offset: usize) -> bool {
        if offset >= self.body_size() as usize {
            return false;
        }

        self.seek_offset = offset;

        true
    }

    /// Advance the cursor by `increment`, with the same bounds check as
    /// `seek`. The idiomatic way to consume the body while checking for
    /// exhaustion.
    pub fn seek_forward(&mut self, increment: usize) -> bool {
        self.seek(self.seek_offset + increment)
    }

    /// Unchecked seek in full-buffer coordinates, padding included.
    /// Bounds are the caller's responsibility.
    pub fn raw_seek(&mut self, offset: usize) {
        self.seek_offset = offset;
    }

    /// Unchecked forward seek in full-buffer coordinates.
    pub fn raw_seek_forward(&mut self, increment: usize) {
        self.raw_seek(self.seek_offset + increment);
    }

    /// The entire buffer, padding included, ready for the transport's
    /// write primitive.
    pub fn as_wire_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Mutable full buffer, for transports that write in place.
    pub fn as_wire_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Consume the frame, yielding the underlying buffer.
    pub fn into_wire_buffer(self) -> Vec<u8> {
        self.buffer
    }
}
