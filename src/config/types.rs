//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::loader::{self, ConfigResult, ConfigWarning};

/// Descriptor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayersConfig {
    /// Descriptor used when none is given on the command line
    #[serde(default = "default_layers_file")]
    pub file: PathBuf,

    /// Use the standard layers when the descriptor does not exist
    #[serde(default = "default_true")]
    pub standard_fallback: bool,
}

impl Default for LayersConfig {
    fn default() -> Self {
        Self {
            file: default_layers_file(),
            standard_fallback: true,
        }
    }
}

fn default_layers_file() -> PathBuf {
    PathBuf::from("layers.xml")
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the configured level by the number of `-v` flags.
    pub fn bumped(self, count: u8) -> Self {
        let base = match self {
            Self::Quiet => 0,
            Self::Normal => 1,
            Self::Verbose => 2,
            Self::Debug => 3,
        };
        match base + usize::from(count) {
            0 => Self::Quiet,
            1 => Self::Normal,
            2 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Most verbose `tracing` level emitted; `-vvv` opens up trace output.
    pub fn max_level(self, extra_v: u8) -> tracing::Level {
        match self {
            Self::Quiet => tracing::Level::ERROR,
            Self::Normal => tracing::Level::WARN,
            Self::Verbose => tracing::Level::INFO,
            Self::Debug if extra_v >= 3 => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub layers: LayersConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ConfigResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, failing on an invalid file
    pub fn load_or_default_with_warnings(
        project_root: Option<&Path>,
    ) -> ConfigResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default_with_warnings(project_root)
    }

    /// Descriptor path, resolved against `root` when relative.
    pub fn layers_file(&self, root: &Path) -> PathBuf {
        if self.layers.file.is_absolute() {
            self.layers.file.clone()
        } else {
            root.join(&self.layers.file)
        }
    }
}
