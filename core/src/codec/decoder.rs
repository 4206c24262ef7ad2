//! codec/decoder.rs
//! Word-table-driven LZ78 decoder.

use std::io::{Read, Write};

use tracing::debug;

use crate::code::CodeSpace;
use crate::codec::config::ApiConfig;
use crate::framer::{PairReader, SymbolWriter};
use crate::telemetry::TransferCounters;
use crate::types::StreamError;
use crate::word::WordTable;

/// Decode pairs from `input` until the stop pair, writing the reconstructed
/// bytes to `output`. Returns the counters of both paths merged.
pub fn decode<R: Read, W: Write>(
    input: R,
    output: W,
    config: &ApiConfig,
) -> Result<TransferCounters, StreamError> {
    let mut pairs = PairReader::new(input, config.pair_block);
    let mut symbols = SymbolWriter::new(output, config.symbol_block);

    let mut table = WordTable::new();
    let mut space = CodeSpace::new();
    let mut counters = TransferCounters::default();
    let mut scratch = Vec::new();

    while let Some((code, sym)) = pairs.read_pair(space.width())? {
        debug_assert_eq!(table.next_code(), space.next());
        let new_code = table.append(code, sym).ok_or(StreamError::UnknownCode {
            code,
            next_code: space.next(),
        })?;

        // `new_code` was just appended, so it always materializes.
        let word = table.materialize(new_code, &mut scratch).ok_or(StreamError::UnknownCode {
            code: new_code,
            next_code: space.next(),
        })?;
        symbols.write_word(word)?;

        if space.advance() {
            debug!(words = table.len(), resets = counters.resets + 1, "decoder dictionary reset");
            table.reset();
            counters.add_reset();
        }
    }
    symbols.flush()?;

    counters.merge(pairs.counters());
    counters.merge(symbols.counters());
    Ok(counters)
}
