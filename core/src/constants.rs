/// Magic number identifying a compressed file.
/// Stored as a `u32` in canonical (little-endian) byte order.
pub const MAGIC: u32 = 0xBAAD_BAAC;

/// Size of the alphabet: one symbol per byte value.
pub const ALPHABET: usize = 256;

/// Bits per symbol on the wire.
pub const SYMBOL_BITS: u32 = 8;

/// Default buffer size (bytes) for both the symbol and the pair path.
pub const DEFAULT_BLOCK: usize = 4 * 1024; // 4 KiB

/// Sanity bound on configured buffer sizes (16 MiB).
pub const MAX_BLOCK: usize = 16 * 1024 * 1024;

/// Permission bits used when the input has no file metadata (stdin).
pub const DEFAULT_PROTECTION: u16 = 0o644;
