// ## Normalized I/O + header read/write

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::headers::{decode_header, encode_header, FileHeader, HeaderError, HEADER_LEN};
use crate::telemetry::TransferCounters;
use crate::types::StreamError;

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn Read>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write>),
    File(PathBuf),
}

impl InputSource {
    pub fn is_file(&self) -> bool {
        matches!(self, InputSource::File(_))
    }
}

impl OutputSink {
    pub fn is_file(&self) -> bool {
        matches!(self, OutputSink::File(_))
    }
}

/// Normalize input source into a boxed reader
pub fn open_input(src: InputSource) -> Result<Box<dyn Read>, StreamError> {
    let reader: Box<dyn Read> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(p) => Box::new(std::fs::File::open(p)?),
        InputSource::Memory(b) => Box::new(io::Cursor::new(b)),
    };
    Ok(reader)
}

/// Normalize output sink into a boxed writer (files are created or truncated)
pub fn open_output(sink: OutputSink) -> Result<Box<dyn Write>, StreamError> {
    let writer: Box<dyn Write> = match sink {
        OutputSink::Writer(w) => w,
        OutputSink::File(p) => Box::new(BufWriter::new(std::fs::File::create(p)?)),
    };
    Ok(writer)
}

/// Fill `buf` from `r`, retrying short reads until it is full or the source
/// is exhausted. Returns the number of bytes read (less than `buf.len()` only
/// at end of input).
pub fn read_full<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut off = 0;

    while off < buf.len() {
        match r.read(&mut buf[off..]) {
            Ok(0) => break,
            Ok(n) => off += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(off)
}

// ================= Header =================

pub fn write_header<W: Write + ?Sized>(
    w: &mut W,
    h: &FileHeader,
    counters: &mut TransferCounters,
) -> Result<(), StreamError> {
    let buf = encode_header(h);
    w.write_all(&buf)?;
    counters.add_bytes(buf.len());
    debug!(protection = h.protection, "header written");
    Ok(())
}

pub fn read_header<R: Read + ?Sized>(
    r: &mut R,
    counters: &mut TransferCounters,
) -> Result<FileHeader, StreamError> {
    let mut buf = [0u8; HEADER_LEN];
    let n = read_full(r, &mut buf)?;
    counters.add_bytes(n);
    if n < HEADER_LEN {
        return Err(HeaderError::BufferTooShort { have: n, need: HEADER_LEN }.into());
    }
    let header = decode_header(&buf)?;
    debug!(protection = header.protection, "header read");
    Ok(header)
}
