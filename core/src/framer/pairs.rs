//! framer/pairs.rs
//! Bit-packed `(code, symbol)` pair path.
//!
//! # Wire layout
//! Each pair is `width` bits of code followed by 8 bits of symbol, both
//! least-significant bit first, packed back to back with no padding. Bit `i`
//! of the stream lives in byte `i / 8` at bit position `i % 8`. The final
//! partial byte is zero-padded.
//!
//! # Width
//! The caller passes the width on every call, computed from its own
//! `next_code` (see `CodeSpace::width`). Encoder and decoder must agree on it
//! pair by pair; a mismatch is not detectable here.
//!
//! # Example
//! ```
//! use lz78_core::framer::{PairReader, PairWriter};
//!
//! let mut out = Vec::new();
//! let mut writer = PairWriter::new(&mut out, 16);
//! writer.write_pair(1, b'a', 2).unwrap();
//! writer.write_pair(0, 0, 2).unwrap();
//! writer.flush().unwrap();
//!
//! let mut reader = PairReader::new(&out[..], 16);
//! assert_eq!(reader.read_pair(2).unwrap(), Some((1, b'a')));
//! assert_eq!(reader.read_pair(2).unwrap(), None);
//! ```

use std::io::{Read, Write};

use tracing::trace;

use crate::code::{bit_length, Code, MAX_CODE_BITS, STOP_CODE};
use crate::constants::SYMBOL_BITS;
use crate::io::read_full;
use crate::telemetry::TransferCounters;
use crate::types::StreamError;

#[inline]
fn check_width(width: u32) -> Result<(), StreamError> {
    if width > MAX_CODE_BITS {
        return Err(StreamError::InvalidWidth(width));
    }
    Ok(())
}

/// Packs pairs into a block buffer and writes full blocks to `inner`.
///
/// # Invariants
/// - `bit_index < buf.len() * 8` between calls (a full block is written out
///   immediately, so no partial byte ever straddles a block write)
/// - every bit at or after `bit_index` in `buf` is zero
pub struct PairWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
    bit_index: usize,
    counters: TransferCounters,
}

impl<W: Write> PairWriter<W> {
    pub fn new(inner: W, block: usize) -> Self {
        Self {
            inner,
            buf: vec![0u8; block.max(1)],
            bit_index: 0,
            counters: TransferCounters::default(),
        }
    }

    /// Append `width` bits of `code` then 8 bits of `sym`.
    pub fn write_pair(&mut self, code: Code, sym: u8, width: u32) -> Result<(), StreamError> {
        check_width(width)?;
        debug_assert!(bit_length(code) <= width, "code {code} does not fit in {width} bits");
        self.put_bits(code as u32, width)?;
        self.put_bits(sym as u32, SYMBOL_BITS)?;
        self.counters.add_pair();
        Ok(())
    }

    fn put_bits(&mut self, mut value: u32, mut count: u32) -> Result<(), StreamError> {
        while count > 0 {
            let byte = self.bit_index / 8;
            let offset = (self.bit_index % 8) as u32;

            // How many bits fit in the current byte?
            let take = count.min(8 - offset);
            let mask = (1u32 << take) - 1;
            self.buf[byte] |= ((value & mask) as u8) << offset;

            value >>= take;
            count -= take;
            self.bit_index += take as usize;

            if self.bit_index == self.buf.len() * 8 {
                self.write_block(self.buf.len())?;
            }
        }
        Ok(())
    }

    fn write_block(&mut self, bytes: usize) -> Result<(), StreamError> {
        self.inner.write_all(&self.buf[..bytes])?;
        self.counters.add_bytes(bytes);
        trace!(bytes, "pair buffer drained");
        self.buf.fill(0);
        self.bit_index = 0;
        Ok(())
    }

    /// Write out every buffered bit, zero-padding the last byte.
    ///
    /// Called once at end of stream, after the stop pair.
    pub fn flush(&mut self) -> Result<(), StreamError> {
        let bytes = self.bit_index.div_ceil(8);
        if bytes > 0 {
            self.write_block(bytes)?;
        }
        self.inner.flush()?;
        Ok(())
    }

    /// Bits buffered but not yet written.
    pub fn pending_bits(&self) -> usize {
        self.bit_index
    }

    pub fn counters(&self) -> &TransferCounters {
        &self.counters
    }
}

/// Unpacks pairs from a block-buffered source.
///
/// # Invariants
/// - `bit_index <= filled * 8 <= buf.len() * 8`
pub struct PairReader<R: Read> {
    inner: R,
    buf: Vec<u8>,
    bit_index: usize,
    filled: usize,
    counters: TransferCounters,
}

impl<R: Read> PairReader<R> {
    pub fn new(inner: R, block: usize) -> Self {
        Self {
            inner,
            buf: vec![0u8; block.max(1)],
            bit_index: 0,
            filled: 0,
            counters: TransferCounters::default(),
        }
    }

    /// Read one pair whose code field is `width` bits wide.
    ///
    /// Returns `Ok(None)` when the code is `STOP_CODE`.
    pub fn read_pair(&mut self, width: u32) -> Result<Option<(Code, u8)>, StreamError> {
        check_width(width)?;
        let code = self.get_bits(width)? as Code;
        let sym = self.get_bits(SYMBOL_BITS)? as u8;
        self.counters.add_pair();
        if code == STOP_CODE {
            return Ok(None);
        }
        Ok(Some((code, sym)))
    }

    fn get_bits(&mut self, mut count: u32) -> Result<u32, StreamError> {
        let mut value = 0u32;
        let mut shift = 0u32;

        while count > 0 {
            if self.bit_index == self.filled * 8 {
                self.refill()?;
            }
            let byte = self.buf[self.bit_index / 8];
            let offset = (self.bit_index % 8) as u32;

            let take = count.min(8 - offset);
            let mask = (1u32 << take) - 1;
            value |= ((byte as u32 >> offset) & mask) << shift;

            shift += take;
            count -= take;
            self.bit_index += take as usize;
        }

        Ok(value)
    }

    fn refill(&mut self) -> Result<(), StreamError> {
        let n = read_full(&mut self.inner, &mut self.buf)?;
        self.counters.add_bytes(n);
        trace!(bytes = n, "pair buffer refilled");
        if n == 0 {
            return Err(StreamError::Truncated);
        }
        self.filled = n;
        self.bit_index = 0;
        Ok(())
    }

    pub fn counters(&self) -> &TransferCounters {
        &self.counters
    }
}
