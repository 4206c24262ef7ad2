//! codec/mod.rs
//! LZ78 state machines and the stream-level API.
//!
//! The encoder and decoder are independent single-pass loops over the same
//! framing protocol. They stay in lockstep only because both derive code
//! widths and reset points from their own `CodeSpace`.

pub mod config;
pub mod encoder;
pub mod decoder;
pub mod api;

pub use config::ApiConfig;
pub use encoder::encode;
pub use decoder::decode;
pub use api::{compress, decompress, decode_stream, encode_stream, DecodeParams, EncodeParams, StreamSummary};
