//! Encode / decode entry points shared by the binaries.

use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::Context;
use lz78_core::codec::{decode_stream, encode_stream, DecodeParams, EncodeParams, StreamSummary};
use lz78_core::constants::DEFAULT_PROTECTION;
use lz78_core::io::{InputSource, OutputSink};
use tracing::debug;

use crate::args::{CommonArgs, DecodeArgs, EncodeArgs};
use crate::permissions;
use crate::report::StatsReport;

fn input_source(path: Option<&Path>) -> InputSource {
    match path {
        Some(p) => InputSource::File(p.to_path_buf()),
        None => InputSource::Reader(Box::new(io::stdin())),
    }
}

fn output_sink(path: Option<&Path>) -> OutputSink {
    match path {
        Some(p) => OutputSink::File(p.to_path_buf()),
        None => OutputSink::Writer(Box::new(BufWriter::new(io::stdout()))),
    }
}

fn emit_stats(common: &CommonArgs, summary: &StreamSummary) -> anyhow::Result<()> {
    if common.wants_stats() {
        StatsReport::from_summary(summary).write_to(&mut io::stderr().lock(), common.json)?;
    }
    Ok(())
}

/// Compress; a header is written only when the output is a file.
pub fn run_encode(args: &EncodeArgs) -> anyhow::Result<()> {
    let common = &args.common;
    let input = common.input.as_deref();
    let output = common.output.as_deref();

    let protection = match input {
        Some(p) => permissions::mode_of(p)
            .with_context(|| format!("cannot open input {}", p.display()))?,
        None => DEFAULT_PROTECTION,
    };
    let sink = output_sink(output);
    let params = EncodeParams::for_sink(&sink, protection);
    debug!(?input, ?output, has_header = params.header.is_some(), "encode");

    let summary = encode_stream(input_source(input), sink, params, &common.api_config())
    .context("compression failed")?;

    if let Some(p) = output {
        permissions::apply_mode(p, protection)
            .with_context(|| format!("cannot set permissions on {}", p.display()))?;
    }

    emit_stats(common, &summary)
}

/// Decompress; a header is expected only when the input is a file.
pub fn run_decode(args: &DecodeArgs) -> anyhow::Result<()> {
    let common = &args.common;
    let input = common.input.as_deref();
    let output = common.output.as_deref();
    let source = input_source(input);
    let params = DecodeParams::for_source(&source);
    debug!(?input, ?output, has_header = params.read_header, "decode");

    let summary = decode_stream(source, output_sink(output), params, &common.api_config())
    .context("decompression failed")?;

    if let (Some(p), Some(header)) = (output, summary.header) {
        permissions::apply_mode(p, header.protection)
            .with_context(|| format!("cannot set permissions on {}", p.display()))?;
    }

    emit_stats(common, &summary)
}
