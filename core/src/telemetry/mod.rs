//! telemetry/mod.rs
//! Transfer counters and run timing.
//!
//! Notes:
//! - Counters accumulate across the whole run and are read once at the end
//!   by a reporting layer. Decoding never consults them.
//! - Each framer object owns its own counters; a run merges them.

pub mod counters;
pub mod timers;

pub use counters::*;
pub use timers::*;
