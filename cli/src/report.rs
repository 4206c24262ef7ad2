//! Human-readable and JSON statistics for a finished run.

use std::fmt;
use std::io::Write;

use lz78_core::codec::StreamSummary;
use lz78_core::telemetry::TransferCounters;
use serde::Serialize;

/// Percentage of space saved; 0 when nothing was transferred.
pub fn space_saving(compressed: u64, uncompressed: u64) -> f64 {
    if uncompressed == 0 {
        return 0.0;
    }
    100.0 * (1.0 - compressed as f64 / uncompressed as f64)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub compressed_bytes: u64,
    pub uncompressed_bytes: u64,
    pub space_saving_pct: f64,
    pub pairs: u64,
    pub resets: u64,
    pub elapsed_ms: f64,
}

impl StatsReport {
    pub fn from_summary(summary: &StreamSummary) -> Self {
        let mut report = Self::from_counters(&summary.counters);
        report.elapsed_ms = summary.elapsed.as_secs_f64() * 1_000.0;
        report
    }

    pub fn from_counters(counters: &TransferCounters) -> Self {
        let compressed = counters.compressed_bytes();
        let uncompressed = counters.total_syms;
        Self {
            compressed_bytes: compressed,
            uncompressed_bytes: uncompressed,
            space_saving_pct: space_saving(compressed, uncompressed),
            pairs: counters.pairs,
            resets: counters.resets,
            elapsed_ms: 0.0,
        }
    }

    /// Write the report as text, or as one JSON object when `json` is set.
    pub fn write_to<W: Write>(&self, w: &mut W, json: bool) -> anyhow::Result<()> {
        if json {
            serde_json::to_writer(&mut *w, self)?;
            writeln!(w)?;
        } else {
            write!(w, "{self}")?;
        }
        Ok(())
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Compressed file size: {} bytes", self.compressed_bytes)?;
        writeln!(f, "Uncompressed file size: {} bytes", self.uncompressed_bytes)?;
        writeln!(f, "Space saving: {:.2}%", self.space_saving_pct)
    }
}
