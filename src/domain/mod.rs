//! Domain Layer
//!
//! This is the core of layertool - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Element, Layer, Library, CustomLayers)
//! - `value_objects/` - Immutable value types (ContentFilter, ContentSelector, Schema)
//! - `services/` - Domain services (DocumentValidator, LayersCompiler)
//! - `policies/` - Business rules (StandardLayers)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Schema loading goes through a trait-defined port

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
