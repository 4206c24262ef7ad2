//! framer/mod.rs
//! Bit-stream framer: the only place bit order and buffer flushing are decided.
//!
//! Two independent paths:
//! - raw symbols (`SymbolReader` / `SymbolWriter`), 8 bits each, byte-buffered;
//! - `(code, symbol)` pairs (`PairWriter` / `PairReader`), bit-packed
//!   LSB-first with the code width supplied by the caller on every call.
//!
//! Each object owns its buffer, cursor and counters. Encoder and decoder
//! each build their own; nothing is shared between them.

pub mod pairs;
pub mod symbols;

pub use pairs::*;
pub use symbols::*;
