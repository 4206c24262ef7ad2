//! framer/symbols.rs
//! Byte-buffered raw symbol path.

use std::io::{Read, Write};

use tracing::trace;

use crate::io::read_full;
use crate::telemetry::TransferCounters;
use crate::types::StreamError;

/// Reads symbols one at a time from a block-buffered source.
///
/// # Invariants
/// - `pos <= len <= buf.len()`
pub struct SymbolReader<R: Read> {
    inner: R,
    buf: Vec<u8>,
    pos: usize,
    len: usize,
    eof: bool,
    counters: TransferCounters,
}

impl<R: Read> SymbolReader<R> {
    pub fn new(inner: R, block: usize) -> Self {
        Self {
            inner,
            buf: vec![0u8; block.max(1)],
            pos: 0,
            len: 0,
            eof: false,
            counters: TransferCounters::default(),
        }
    }

    /// Next symbol, or `None` once the source is exhausted.
    #[inline]
    pub fn read_symbol(&mut self) -> Result<Option<u8>, StreamError> {
        if self.pos == self.len {
            if self.eof {
                return Ok(None);
            }
            self.refill()?;
            if self.len == 0 {
                return Ok(None);
            }
        }
        let sym = self.buf[self.pos];
        self.pos += 1;
        Ok(Some(sym))
    }

    fn refill(&mut self) -> Result<(), StreamError> {
        self.len = read_full(&mut self.inner, &mut self.buf)?;
        self.pos = 0;
        // A short block means the source is done.
        self.eof = self.len < self.buf.len();
        self.counters.add_syms(self.len);
        trace!(bytes = self.len, "symbol buffer refilled");
        Ok(())
    }

    pub fn counters(&self) -> &TransferCounters {
        &self.counters
    }
}

/// Writes symbols and whole sequences through a block buffer.
pub struct SymbolWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
    pos: usize,
    counters: TransferCounters,
}

impl<W: Write> SymbolWriter<W> {
    pub fn new(inner: W, block: usize) -> Self {
        Self {
            inner,
            buf: vec![0u8; block.max(1)],
            pos: 0,
            counters: TransferCounters::default(),
        }
    }

    #[inline]
    pub fn write_symbol(&mut self, sym: u8) -> Result<(), StreamError> {
        if self.pos == self.buf.len() {
            self.drain()?;
        }
        self.buf[self.pos] = sym;
        self.pos += 1;
        Ok(())
    }

    /// Append a reconstructed sequence.
    pub fn write_word(&mut self, word: &[u8]) -> Result<(), StreamError> {
        let mut rest = word;
        while !rest.is_empty() {
            if self.pos == self.buf.len() {
                self.drain()?;
            }
            let take = rest.len().min(self.buf.len() - self.pos);
            self.buf[self.pos..self.pos + take].copy_from_slice(&rest[..take]);
            self.pos += take;
            rest = &rest[take..];
        }
        Ok(())
    }

    /// Write out everything buffered. Called once at end of stream.
    pub fn flush(&mut self) -> Result<(), StreamError> {
        self.drain()?;
        self.inner.flush()?;
        Ok(())
    }

    fn drain(&mut self) -> Result<(), StreamError> {
        if self.pos > 0 {
            self.inner.write_all(&self.buf[..self.pos])?;
            self.counters.add_syms(self.pos);
            trace!(bytes = self.pos, "symbol buffer drained");
            self.pos = 0;
        }
        Ok(())
    }

    pub fn counters(&self) -> &TransferCounters {
        &self.counters
    }
}
