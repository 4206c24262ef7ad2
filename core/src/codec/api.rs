// ## `api.rs`: stable public API

use std::time::Duration;

use tracing::info;

use crate::codec::config::ApiConfig;
use crate::codec::{decoder, encoder};
use crate::headers::FileHeader;
use crate::io::{open_input, open_output, read_header, write_header, InputSource, OutputSink};
use crate::telemetry::{TelemetryTimer, TransferCounters};
use crate::types::StreamError;

#[derive(Clone, Debug, Default)]
pub struct EncodeParams {
    /// Header to prepend; `None` when the output is a stream.
    pub header: Option<FileHeader>,
}

#[derive(Clone, Debug, Default)]
pub struct DecodeParams {
    /// Whether the input starts with a header; false when it is a stream.
    pub read_header: bool,
}

impl EncodeParams {
    /// Header carrying `protection` when `sink` is a file, none for a stream.
    pub fn for_sink(sink: &OutputSink, protection: u16) -> Self {
        Self { header: sink.is_file().then(|| FileHeader::with_protection(protection)) }
    }
}

impl DecodeParams {
    /// A header is expected only when `source` is a file.
    pub fn for_source(source: &InputSource) -> Self {
        Self { read_header: source.is_file() }
    }
}

/// What a finished run reports back to its caller.
#[derive(Clone, Debug)]
pub struct StreamSummary {
    pub counters: TransferCounters,
    /// Header written (encode) or read (decode), if any.
    pub header: Option<FileHeader>,
    pub elapsed: Duration,
}

/// Encode `input` into `output`.
pub fn encode_stream(
    input: InputSource,
    output: OutputSink,
    params: EncodeParams,
    config: &ApiConfig,
) -> Result<StreamSummary, StreamError> {
    config.validate()?;
    let mut timer = TelemetryTimer::new();

    let mut reader = open_input(input)?;
    let mut writer = open_output(output)?;

    let mut counters = TransferCounters::default();
    if let Some(ref header) = params.header {
        write_header(&mut writer, header, &mut counters)?;
    }

    counters += encoder::encode(&mut reader, &mut writer, config)?;
    timer.finish();

    info!(
        total_bits = counters.total_bits,
        total_syms = counters.total_syms,
        pairs = counters.pairs,
        resets = counters.resets,
        "encode finished"
    );

    Ok(StreamSummary { counters, header: params.header, elapsed: timer.elapsed() })
}

/// Decode `input` into `output`.
pub fn decode_stream(
    input: InputSource,
    output: OutputSink,
    params: DecodeParams,
    config: &ApiConfig,
) -> Result<StreamSummary, StreamError> {
    config.validate()?;
    let mut timer = TelemetryTimer::new();

    let mut reader = open_input(input)?;

    // Validate the header before touching the output.
    let mut counters = TransferCounters::default();
    let header = if params.read_header {
        Some(read_header(&mut reader, &mut counters)?)
    } else {
        None
    };

    let mut writer = open_output(output)?;
    counters += decoder::decode(&mut reader, &mut writer, config)?;
    timer.finish();

    info!(
        total_bits = counters.total_bits,
        total_syms = counters.total_syms,
        pairs = counters.pairs,
        resets = counters.resets,
        "decode finished"
    );

    Ok(StreamSummary { counters, header, elapsed: timer.elapsed() })
}

/// Headerless in-memory compression.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, StreamError> {
    let mut out = Vec::new();
    encoder::encode(data, &mut out, &ApiConfig::default())?;
    Ok(out)
}

/// Headerless in-memory decompression.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, StreamError> {
    let mut out = Vec::new();
    decoder::decode(data, &mut out, &ApiConfig::default())?;
    Ok(out)
}
