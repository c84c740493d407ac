//! Schema loading
//!
//! The descriptor schema ships inside the binary and is parsed once per process.

use std::sync::OnceLock;

use crate::domain::ports::SchemaProvider;
use crate::domain::value_objects::Schema;
use crate::error::{LayersError, LayersResult};

/// Version of the embedded schema asset.
pub const SCHEMA_VERSION: &str = "3.5";

const SCHEMA_SOURCE: &str = include_str!("layers-3.5.toml");

static EMBEDDED: OnceLock<Result<Schema, String>> = OnceLock::new();

/// The embedded schema, loaded on first use.
///
/// A broken asset is reported as `SchemaLoad` on every call, never as a document error.
pub fn layers_schema() -> LayersResult<&'static Schema> {
    EMBEDDED
        .get_or_init(|| {
            tracing::debug!(version = SCHEMA_VERSION, "loading layers schema");
            parse_schema(SCHEMA_SOURCE)
        })
        .as_ref()
        .map_err(|message| LayersError::SchemaLoad {
            version: SCHEMA_VERSION.to_string(),
            message: message.clone(),
        })
}

fn parse_schema(source: &str) -> Result<Schema, String> {
    let schema: Schema = toml::from_str(source).map_err(|e| e.to_string())?;
    schema.check_references()?;
    Ok(schema)
}

/// [`SchemaProvider`] backed by the embedded asset.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSchema;

impl SchemaProvider for EmbeddedSchema {
    fn schema(&self) -> LayersResult<&Schema> {
        layers_schema()
    }
}

/// [`SchemaProvider`] parsed from caller-supplied TOML.
#[derive(Debug, Clone)]
pub struct TomlSchema {
    schema: Result<Schema, String>,
}

impl TomlSchema {
    pub fn parse(source: &str) -> Self {
        Self {
            schema: parse_schema(source),
        }
    }
}

impl SchemaProvider for TomlSchema {
    fn schema(&self) -> LayersResult<&Schema> {
        self.schema.as_ref().map_err(|message| LayersError::SchemaLoad {
            version: "custom".to_string(),
            message: message.clone(),
        })
    }
}
