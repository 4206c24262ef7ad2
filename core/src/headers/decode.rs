//! headers/decode.rs
//!
//! Header decoding.
//!
//! Design notes:
//! - Mirror of `encode.rs`: read native integers, swap back when the host
//!   order is not canonical, then validate.
//! - A magic mismatch is fatal; nothing after a bad header is trusted.

use byteorder::{ByteOrder, NativeEndian};

use crate::headers::types::{host_is_canonical, FileHeader, HeaderError, HEADER_LEN};

/// Deserialize a header as a host with native byte order `H` would.
pub fn decode_header_for<H: ByteOrder>(buf: &[u8]) -> Result<FileHeader, HeaderError> {
    if buf.len() < HEADER_LEN {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: HEADER_LEN });
    }

    let magic = H::read_u32(&buf[0..4]);
    let protection = H::read_u16(&buf[4..6]);

    let h = if host_is_canonical::<H>() {
        FileHeader { magic, protection }
    } else {
        FileHeader { magic: magic.swap_bytes(), protection: protection.swap_bytes() }
    };

    h.validate()?;
    Ok(h)
}

/// Deserialize a canonical header on this host.
#[inline]
pub fn decode_header(buf: &[u8]) -> Result<FileHeader, HeaderError> {
    decode_header_for::<NativeEndian>(buf)
}
