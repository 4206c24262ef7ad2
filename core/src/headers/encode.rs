//! headers/encode.rs
//!
//! Header encoding.
//!
//! Design notes:
//! - The header is laid out as the host would store it in memory, after
//!   swapping each field when the host order differs from the canonical one.
//! - `encode_header_for` takes the host order as a type parameter so a
//!   big-endian host can be exercised on any machine.

use byteorder::{ByteOrder, NativeEndian};

use crate::headers::types::{host_is_canonical, FileHeader, HEADER_LEN};

/// Serialize `h` as a host with native byte order `H` would.
#[inline]
pub fn encode_header_for<H: ByteOrder>(h: &FileHeader) -> [u8; HEADER_LEN] {
    let (magic, protection) = if host_is_canonical::<H>() {
        (h.magic, h.protection)
    } else {
        (h.magic.swap_bytes(), h.protection.swap_bytes())
    };

    let mut out = [0u8; HEADER_LEN];
    H::write_u32(&mut out[0..4], magic);      // 0..4 magic
    H::write_u16(&mut out[4..6], protection); // 4..6 permission bits
    // 6..8 reserved, zero
    out
}

/// Serialize `h` in canonical byte order on this host.
#[inline]
pub fn encode_header(h: &FileHeader) -> [u8; HEADER_LEN] {
    encode_header_for::<NativeEndian>(h)
}
