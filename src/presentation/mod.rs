//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/JSON)
//! - Diagnostic logging setup
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `output` - Renderers for compiled layers, assignments and the schema
//! - `json` - NDJSON event helpers
//! - `logging` - `tracing` subscriber initialization

pub mod cli;
pub mod json;
pub mod logging;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::{LayersView, SchemaView, SelectorView};
