//! telemetry/counters.rs
//! Mutable counters collected while a stream is encoded or decoded.
//!
//! Summary: bits moved through the pair path (and header), symbols moved
//! through the raw path, plus pair and reset counts for diagnostics.
use serde::Serialize;
use std::ops::AddAssign;

/// Deterministic counters collected during stream processing
#[derive(Default, Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct TransferCounters {
    /// Bits read or written on the compressed side, header included.
    pub total_bits: u64,
    /// Symbols read or written on the uncompressed side.
    pub total_syms: u64,
    /// Pairs transferred, stop pair included.
    pub pairs: u64,
    /// Dictionary resets performed.
    pub resets: u64,
}

impl TransferCounters {
    /// Record one read/write call on the compressed side.
    #[inline]
    pub fn add_bytes(&mut self, n: usize) {
        self.total_bits += 8 * n as u64;
    }

    /// Record one read/write call on the uncompressed side.
    #[inline]
    pub fn add_syms(&mut self, n: usize) {
        self.total_syms += n as u64;
    }

    #[inline]
    pub fn add_pair(&mut self) {
        self.pairs += 1;
    }

    #[inline]
    pub fn add_reset(&mut self) {
        self.resets += 1;
    }

    /// Whole bytes on the compressed side.
    pub fn compressed_bytes(&self) -> u64 {
        self.total_bits / 8
    }

    // Readers and writers keep their own counters; fold them once at the end.
    pub fn merge(&mut self, other: &TransferCounters) {
        self.total_bits += other.total_bits;
        self.total_syms += other.total_syms;
        self.pairs += other.pairs;
        self.resets += other.resets;
    }
}

impl AddAssign for TransferCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
