use std::path::PathBuf;

use clap::{Args, Parser};
use lz78_core::codec::ApiConfig;

/// Options shared by both binaries.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Display statistics on stderr
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Input file (stdin by default)
    #[arg(short = 'i', value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file (stdout by default)
    #[arg(short = 'o', value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print statistics as JSON instead of text (implies -v)
    #[arg(long)]
    pub json: bool,

    /// Raw-symbol buffer size in bytes
    #[arg(long, value_name = "BYTES")]
    pub symbol_block: Option<usize>,

    /// Pair buffer size in bytes
    #[arg(long, value_name = "BYTES")]
    pub pair_block: Option<usize>,
}

impl CommonArgs {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.symbol_block, self.pair_block)
    }

    pub fn wants_stats(&self) -> bool {
        self.verbose || self.json
    }
}

/// Compresses files using the LZ78 compression algorithm.
/// Compressed files are decompressed with the corresponding decoder.
#[derive(Parser, Debug)]
#[command(name = "encode")]
pub struct EncodeArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Decompresses files with the LZ78 decompression algorithm.
/// Used with files compressed with the corresponding encoder.
#[derive(Parser, Debug)]
#[command(name = "decode")]
pub struct DecodeArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
