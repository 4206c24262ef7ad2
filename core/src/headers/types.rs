//! headers/types.rs
//! Header struct, canonical byte order and header errors.

use byteorder::{ByteOrder, LittleEndian};
use thiserror::Error;

use crate::constants::{DEFAULT_PROTECTION, MAGIC};

/// Fixed header size in bytes.
pub const HEADER_LEN: usize = 8;

/// Byte order every header is stored in on disk.
pub type Canonical = LittleEndian;

/// Header values as the host sees them (native integers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub magic: u32,      // MAGIC marker
    pub protection: u16, // permission bits of the source file
}

impl Default for FileHeader {
    fn default() -> Self {
        Self { magic: MAGIC, protection: DEFAULT_PROTECTION }
    }
}

impl FileHeader {
    pub const LEN: usize = HEADER_LEN;

    /// Header carrying the given permission bits.
    ///
    /// Only the low 16 bits of a platform mode fit; callers truncate.
    pub fn with_protection(protection: u16) -> Self {
        Self { magic: MAGIC, protection }
    }

    pub fn validate(&self) -> Result<(), HeaderError> {
        if self.magic != MAGIC {
            return Err(HeaderError::InvalidMagic { have: self.magic, need: MAGIC });
        }
        Ok(())
    }
}

/// Whether a host with native order `H` already stores integers canonically.
#[inline]
pub fn host_is_canonical<H: ByteOrder>() -> bool {
    H::read_u16(&[0x01, 0x00]) == Canonical::read_u16(&[0x01, 0x00])
}

#[derive(Debug, Error)]
pub enum HeaderError {
    /// Input ended before a full header was read.
    #[error("header buffer too short: {have} < {need}")]
    BufferTooShort { have: usize, need: usize },

    /// Magic does not match after byte-order correction.
    #[error("bad magic number: expected {need:#010x}, got {have:#010x}")]
    InvalidMagic { have: u32, need: u32 },
}
