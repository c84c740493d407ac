//! Compile use case
//!
//! Read → parse → validate → extract. Schema loading goes through the [`SchemaProvider`]
//! port so tests can swap the embedded schema out.

use std::fs;
use std::path::Path;

use crate::domain::entities::{CustomLayers, Element};
use crate::domain::ports::SchemaProvider;
use crate::domain::services::LayersCompiler;
use crate::error::{LayersError, LayersResult};
use crate::infrastructure::schema::EmbeddedSchema;
use crate::infrastructure::xml::parse_document;

pub struct CompileUseCase<P: SchemaProvider = EmbeddedSchema> {
    schema: P,
}

impl Default for CompileUseCase<EmbeddedSchema> {
    fn default() -> Self {
        Self::new(EmbeddedSchema)
    }
}

impl<P: SchemaProvider> CompileUseCase<P> {
    pub fn new(schema: P) -> Self {
        Self { schema }
    }

    pub fn compile(&self, document: &Element) -> LayersResult<CustomLayers> {
        let schema = self.schema.schema()?;
        LayersCompiler::new(schema).compile(document)
    }

    pub fn compile_str(&self, text: &str) -> LayersResult<CustomLayers> {
        let document = parse_document(text)?;
        self.compile(&document)
    }

    pub fn compile_file(&self, path: &Path) -> LayersResult<CustomLayers> {
        tracing::info!(path = %path.display(), "compiling layers descriptor");
        let text = fs::read_to_string(path).map_err(|source| LayersError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.compile_str(&text)
    }
}

/// Compile a parsed document with the embedded schema.
pub fn compile(document: &Element) -> LayersResult<CustomLayers> {
    CompileUseCase::default().compile(document)
}

/// Parse and compile descriptor text with the embedded schema.
pub fn compile_str(text: &str) -> LayersResult<CustomLayers> {
    CompileUseCase::default().compile_str(text)
}

/// Read, parse and compile a descriptor file with the embedded schema.
pub fn compile_file(path: &Path) -> LayersResult<CustomLayers> {
    CompileUseCase::default().compile_file(path)
}
