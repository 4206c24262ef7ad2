//! codec/encoder.rs
//! Trie-driven LZ78 encoder.

use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::code::{CodeSpace, STOP_CODE};
use crate::codec::config::ApiConfig;
use crate::framer::{PairWriter, SymbolReader};
use crate::telemetry::TransferCounters;
use crate::trie::Trie;
use crate::types::StreamError;

/// Encode every byte of `input` as pairs on `output`, ending with the stop
/// pair and a flush. Returns the counters of both paths merged.
pub fn encode<R: Read, W: Write>(
    input: R,
    output: W,
    config: &ApiConfig,
) -> Result<TransferCounters, StreamError> {
    let mut symbols = SymbolReader::new(input, config.symbol_block);
    let mut pairs = PairWriter::new(output, config.pair_block);

    let mut trie = Trie::new();
    let mut space = CodeSpace::new();
    let mut counters = TransferCounters::default();

    let root = trie.root();
    let mut cursor = root;
    // Parent of `cursor` and the symbol that led to it; used for the final flush.
    let mut parent = root;
    let mut last_sym = 0u8;

    while let Some(sym) = symbols.read_symbol()? {
        match trie.step(cursor, sym) {
            Some(child) => {
                parent = cursor;
                cursor = child;
            }
            None => {
                pairs.write_pair(trie.code(cursor), sym, space.width())?;
                trie.insert(cursor, sym, space.next());
                cursor = root;
                if space.advance() {
                    debug!(nodes = trie.len(), resets = counters.resets + 1, "encoder dictionary reset");
                    trie.reset();
                    debug_assert!(trie.is_empty());
                    counters.add_reset();
                }
            }
        }
        last_sym = sym;
    }

    // Pending match: re-emit it as (parent, last symbol). The decoder will
    // learn a code for it, so advance the same way it will.
    if cursor != root {
        pairs.write_pair(trie.code(parent), last_sym, space.width())?;
        if space.advance() {
            counters.add_reset();
            debug!(resets = counters.resets, "encoder dictionary reset on final pair");
        }
    }

    pairs.write_pair(STOP_CODE, 0, space.width())?;
    trace!(pending_bits = pairs.pending_bits(), "flushing pair path");
    pairs.flush()?;

    counters.merge(symbols.counters());
    counters.merge(pairs.counters());
    Ok(counters)
}
