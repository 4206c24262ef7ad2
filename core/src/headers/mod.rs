//! headers/mod.rs
//! Container header wrapped around file-to-file payloads.
//!
//! Notes:
//! - Fixed-size header (8 bytes): 32-bit magic, 16-bit permission bits,
//!   2 reserved bytes (always written as zero, ignored on read).
//! - Canonical byte order is little-endian regardless of host.
//! - Omitted entirely when either endpoint is a stream rather than a file.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
