//! # Length-Prefix Codec
//!
//! Explicit big-endian encode/decode for the 4-byte length prefix.
//!
//! The prefix is always network byte order regardless of host endianness;
//! this is the wire contract with any peer. Both `MessageFrame` and
//! `FragmentAssembler` go through these two functions, so the encoding can
//! never drift between the send and receive paths.

use crate::error::{FramingError, Result};

/// Size of the length prefix in bytes
pub const MSG_SIZE_LEN: usize = 4;

/// Encode a body length as the 4-byte big-endian wire prefix.
#[inline]
pub fn encode_msg_size(size: u32) -> [u8; MSG_SIZE_LEN] {
    size.to_be_bytes()
}

/// Decode a body length from the first 4 bytes of `data`.
///
/// Returns `TruncatedHeader` when fewer than 4 bytes are available rather
/// than reading past the end of the slice.
#[inline]
pub fn decode_msg_size(data: &[u8]) -> Result<u32> {
    let prefix: [u8; MSG_SIZE_LEN] =
        data.get(..MSG_SIZE_LEN)
            .and_then(|b| b.try_into().ok())
            .ok_or(FramingError::TruncatedHeader {
                got: data.len(),
                need: MSG_SIZE_LEN,
            })?;

    Ok(u32::from_be_bytes(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_big_endian() {
        assert_eq!(encode_msg_size(2), [0x00, 0x00, 0x00, 0x02]);
        assert_eq!(encode_msg_size(0x0102_0304), [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_decode_roundtrip_extremes() {
        for n in [0u32, 1, 255, 256, 0xFFFF_FFFF] {
            let decoded = decode_msg_size(&encode_msg_size(n)).unwrap();
            assert_eq!(decoded, n);
        }
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let mut bytes = encode_msg_size(7).to_vec();
        bytes.extend_from_slice(b"payload");
        assert_eq!(decode_msg_size(&bytes).unwrap(), 7);
    }

    #[test]
    fn test_decode_short_input_is_truncated_header() {
        for len in 0..MSG_SIZE_LEN {
            let bytes = vec![0u8; len];
            let err = decode_msg_size(&bytes).unwrap_err();
            assert!(matches!(
                err,
                crate::error::FramingError::TruncatedHeader { got, need: 4 } if got == len
            ));
        }
    }
}
