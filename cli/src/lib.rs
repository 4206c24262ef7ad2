//! lz78-cli
//!
//! Thin process layer over `lz78-core`: argument parsing, permission-bit
//! propagation, the statistics report and logging setup. The `encode` and
//! `decode` binaries are one-liners over `commands`.

pub mod args;
pub mod commands;
pub mod logging;
pub mod permissions;
pub mod report;
