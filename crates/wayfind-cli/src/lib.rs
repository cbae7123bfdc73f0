//! Wayfind CLI library.
//!
//! Subcommand handlers, terminal styling, output formatting and the text
//! visualizer used by the `wayfind-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
pub mod visualizer;
