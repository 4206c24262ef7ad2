//! code.rs
//! Code space shared by the encoder and the decoder.
//!
//! Design notes:
//! - Codes are plain `u16`; sentinels sit below `START_CODE` so they never
//!   collide with an assignable code.
//! - `CodeSpace` is the single owner of `next_code` on either side. Both the
//!   code width and the dictionary reset trigger are derived from it.

/// Integer handle for a learned sequence.
pub type Code = u16;

/// Terminates the stream. Written once by the encoder.
pub const STOP_CODE: Code = 0;

/// The empty sequence / trie root. Never written as a learned code.
pub const EMPTY_CODE: Code = 1;

/// First code handed out after start-up or a reset.
pub const START_CODE: Code = 2;

/// Capacity of the code space. Reaching it forces a dictionary reset.
pub const MAX_CODE: Code = u16::MAX;

/// Widest code on the wire: `bit_length(MAX_CODE - 1)`.
pub const MAX_CODE_BITS: u32 = 16;

/// Number of bits needed to represent `value` (0 for 0).
#[inline]
pub const fn bit_length(value: Code) -> u32 {
    Code::BITS - value.leading_zeros()
}

/// Tracks the next code to assign and derives the current code width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpace {
    next: Code,
}

impl Default for CodeSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeSpace {
    pub const fn new() -> Self {
        Self { next: START_CODE }
    }

    /// Code the next learned sequence will receive.
    #[inline]
    pub const fn next(&self) -> Code {
        self.next
    }

    /// Width (bits) of the code field for the pair about to be written or read.
    #[inline]
    pub const fn width(&self) -> u32 {
        bit_length(self.next)
    }

    /// Consume `next` and move on.
    ///
    /// Returns `true` when the space is exhausted and has rewound to
    /// `START_CODE`; the caller must reset its dictionary before the next pair.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.next += 1;
        if self.next == MAX_CODE {
            self.next = START_CODE;
            true
        } else {
            false
        }
    }

    /// Number of codes handed out since the last reset.
    pub const fn assigned(&self) -> usize {
        (self.next - START_CODE) as usize
    }
}
