//! lz78-core
//!
//! LZ78 dictionary coder with a bounded 16-bit code space and periodic
//! dictionary reset. The encoder grows a prefix trie, the decoder rebuilds
//! the same dictionary as a code-indexed word table, and both speak a
//! variable-width bit-packed pair format.

#![forbid(unsafe_code)]

// Shared and top level
pub mod code;
pub mod constants;
pub mod types;

pub mod headers;
pub mod io;
pub mod telemetry;

// Dictionary structures and framing
pub mod framer;
pub mod trie;
pub mod word;

// Encode / decode
pub mod codec;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::code::{Code, CodeSpace, EMPTY_CODE, MAX_CODE, START_CODE, STOP_CODE};
    pub use crate::codec::{
        compress, decode_stream, decompress, encode_stream, ApiConfig, DecodeParams, EncodeParams,
        StreamSummary,
    };
    pub use crate::headers::FileHeader;
    pub use crate::io::{InputSource, OutputSink};
    pub use crate::telemetry::TransferCounters;
    pub use crate::types::StreamError;
}
