//! Xgen - test runner generator for Fossil Logic xtest
//!
//! Xgen is a CLI tool and library that scans a project tree for `xtest_*`
//! test sources, collects the test pools they declare via
//! `XTEST_DEFINE_POOL(...)`, and regenerates one `xunit_runner` source file
//! per output dialect so the runner never has to be edited by hand.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core pipeline (scan, extract, aggregate, emit)

pub mod cli;
pub mod config;
pub mod core;
