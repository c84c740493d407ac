//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::{Config, Verbosity};

/// Project-level config file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "layertool.toml";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ConfigResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// The first config file found must be valid; its warnings are returned.
pub fn load_or_default_with_warnings(
    project_root: Option<&Path>,
) -> ConfigResult<(Config, Vec<ConfigWarning>)> {
    match candidate_files(project_root).into_iter().next() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            Ok((with_env_overrides(config), warnings))
        }
        None => Ok((with_env_overrides(Config::default()), Vec::new())),
    }
}

/// Existing config files, highest priority first.
fn candidate_files(project_root: Option<&Path>) -> Vec<PathBuf> {
    let project = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let user = dirs::config_dir().map(|dir| dir.join("layertool/config.toml"));

    project
        .into_iter()
        .chain(user)
        .filter(|path| path.exists())
        .collect()
}

/// Apply environment variable overrides (LAYERTOOL_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source.
pub fn with_overrides_from(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // LAYERTOOL_LAYERS_FILE
    if let Some(file) = var("LAYERTOOL_LAYERS_FILE") {
        if !file.trim().is_empty() {
            config.layers.file = PathBuf::from(file);
        }
    }

    // LAYERTOOL_STANDARD_FALLBACK
    if let Some(val) = var("LAYERTOOL_STANDARD_FALLBACK") {
        config.layers.standard_fallback = val.to_lowercase() != "false" && val != "0";
    }

    // LAYERTOOL_VERBOSITY
    if let Some(verbosity) = var("LAYERTOOL_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["layers", "file", "standard_fallback", "output", "verbosity"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn suggest_key_for_test(unknown: &str) -> Option<String> {
    suggest_key(unknown)
}
