//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod content_filter;
mod content_selector;
mod schema;

pub use content_filter::{ApplicationPattern, Content, ContentFilter, LibraryPattern};
pub use content_selector::ContentSelector;
pub use schema::{AttributeRule, ChildRule, ContentModel, ElementRule, Schema, SchemaViolation};
