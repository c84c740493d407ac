//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// layertool - compile layers.xml descriptors into layer assignment rules
#[derive(Parser, Debug)]
#[command(name = "layertool")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a layers.xml descriptor and show its layers and selectors
    Compile {
        /// Descriptor to compile (default: configured layers file)
        file: Option<PathBuf>,
    },

    /// Show which layer each resource or library belongs to
    ///
    /// Items are reported grouped by kind: resources first, then libraries, then modules.
    /// Within each group they keep command-line order.
    Assign {
        /// Descriptor to assign with (default: configured layers file)
        #[arg(long = "layers", value_name = "FILE")]
        layers: Option<PathBuf>,

        /// Application resource path (can be specified multiple times)
        #[arg(long = "resource", value_name = "PATH")]
        resources: Vec<String>,

        /// Library coordinates group:artifact:version
        #[arg(long = "library", value_name = "GAV")]
        libraries: Vec<String>,

        /// Local module dependency coordinates group:artifact:version
        #[arg(long = "module", value_name = "GAV")]
        modules: Vec<String>,
    },

    /// Show the embedded descriptor schema
    Schema,
}
