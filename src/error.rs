//! Error types for layertool
//!
//! Uses `thiserror` for library errors. The binary wraps these with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::SchemaViolation;

/// Result type alias for layertool operations
pub type LayersResult<T> = Result<T, LayersError>;

/// Kind of content handed to a layer lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    ApplicationResource,
    Library,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::ApplicationResource => write!(f, "application resource"),
            ContentKind::Library => write!(f, "library"),
        }
    }
}

/// Main error type for layertool operations
#[derive(Error, Debug)]
pub enum LayersError {
    /// The embedded schema could not be loaded (broken build, not a user error)
    #[error("unable to load layers schema {version}: {message}")]
    SchemaLoad { version: String, message: String },

    /// Document does not conform to the schema
    #[error("Invalid layers.xml configuration")]
    InvalidConfiguration {
        #[source]
        source: SchemaViolation,
    },

    /// A section that must be singular appears more than once
    #[error("Multiple '{tag}' nodes found")]
    MultipleNodes { tag: String },

    /// An include/exclude pattern could not be compiled
    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Document is not well-formed XML
    #[error("malformed layers.xml: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Descriptor could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No selector claimed the item
    #[error("No layer defined in layers.xml for {kind} '{item}'")]
    NoLayerFor { kind: ContentKind, item: String },
}

impl LayersError {
    /// Whether the error was caused by the document rather than the installation.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfiguration { .. }
                | Self::MultipleNodes { .. }
                | Self::InvalidPattern { .. }
                | Self::Xml(_)
        )
    }
}
