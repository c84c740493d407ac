//! Configuration module for layertool
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LAYERTOOL_*)
//! 3. Project config (./layertool.toml)
//! 4. User config (~/.config/layertool/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    with_overrides_from, ConfigError, ConfigResult, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{Config, LayersConfig, OutputConfig, Verbosity};
