use crate::constants::{DEFAULT_BLOCK, MAX_BLOCK};
use crate::types::StreamError;

/// Buffer sizing for a run. The symbol and pair paths are sized independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    /// Bytes buffered on the raw-symbol path.
    pub symbol_block: usize,

    /// Bytes buffered on the pair path.
    pub pair_block: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            symbol_block: DEFAULT_BLOCK,
            pair_block: DEFAULT_BLOCK,
        }
    }
}

impl ApiConfig {
    pub fn new(symbol_block: Option<usize>, pair_block: Option<usize>) -> Self {
        Self {
            symbol_block: symbol_block.unwrap_or(DEFAULT_BLOCK),
            pair_block: pair_block.unwrap_or(DEFAULT_BLOCK),
        }
    }

    pub fn validate(&self) -> Result<(), StreamError> {
        for (name, size) in [("symbol_block", self.symbol_block), ("pair_block", self.pair_block)] {
            if size == 0 {
                return Err(StreamError::Config(format!("{name} must be non-zero")));
            }
            if size > MAX_BLOCK {
                return Err(StreamError::Config(format!("{name} {size} exceeds {MAX_BLOCK}")));
            }
        }
        Ok(())
    }
}
