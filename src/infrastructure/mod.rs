//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O and parsing.
//!
//! ## Structure
//!
//! - `schema/` - Embedded descriptor schema (`SchemaProvider` implementations)
//! - `xml/` - XML text to `Element` trees

pub mod schema;
pub mod xml;

// Re-export for convenience
pub use schema::{layers_schema, EmbeddedSchema, TomlSchema, SCHEMA_VERSION};
pub use xml::parse_document;
