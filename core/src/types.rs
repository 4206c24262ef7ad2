use std::io;

use thiserror::Error;

use crate::code::Code;
use crate::headers::HeaderError;

/// Unified stream error covering I/O, header, framing and dictionary failures.
/// - `From<T>` impls let `?` work across the encoder and decoder.
/// - None of these are recoverable: the stream is sequential and
///   position-dependent, so a run either completes or fails outright.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Underlying read/write could not make progress.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Container header could not be read or did not validate.
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    /// A pair referenced a code the decoder has not assigned.
    #[error("unknown code {code} (next code is {next_code})")]
    UnknownCode { code: Code, next_code: Code },

    /// Compressed input ended before the stop code.
    #[error("compressed stream ended before the stop code")]
    Truncated,

    /// Code width outside `0..=16`.
    #[error("invalid code width: {0} bits")]
    InvalidWidth(u32),

    /// Rejected configuration value.
    #[error("configuration error: {0}")]
    Config(String),
}
