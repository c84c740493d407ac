//! SchemaProvider port
//!
//! Supplies the schema descriptors are validated against.

use crate::domain::value_objects::Schema;
use crate::error::LayersResult;

pub trait SchemaProvider: Send + Sync {
    /// The loaded schema. A schema that cannot be loaded yields `LayersError::SchemaLoad`.
    fn schema(&self) -> LayersResult<&Schema>;
}
