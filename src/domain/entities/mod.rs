//! Domain Entities
//!
//! - `Element` - A parsed descriptor node
//! - `Layer` - A named image layer
//! - `Library` - A dependency artifact
//! - `CustomLayers` - A compiled descriptor

mod custom_layers;
mod element;
mod layer;
mod layers;
mod library;

pub use custom_layers::CustomLayers;
pub use element::{Attribute, Element};
pub use layer::Layer;
pub use layers::Layers;
pub use library::{Library, LibraryCoordinates};
