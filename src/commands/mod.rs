//! Command handlers for the `layertool` binary

pub mod assign;
pub mod compile;
pub mod schema;

use std::path::PathBuf;

use anyhow::Result;
use layertool::config::Config;

/// State shared by every command.
pub struct CommandContext {
    pub json: bool,
    pub config: Config,
    pub working_dir: PathBuf,
}

impl CommandContext {
    pub fn new(json: bool, config: Config) -> Result<Self> {
        Ok(Self {
            json,
            config,
            working_dir: std::env::current_dir()?,
        })
    }

    /// Descriptor to use when none is given on the command line.
    pub fn configured_layers_file(&self) -> PathBuf {
        self.config.layers_file(&self.working_dir)
    }
}
