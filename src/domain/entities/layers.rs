//! Layers abstraction
//!
//! Anything that can list layers in order and place content into them.

use crate::domain::entities::{Layer, Library};
use crate::error::LayersResult;

pub trait Layers {
    /// Layers in the order they are written to the image.
    fn layers(&self) -> &[Layer];

    /// Layer for an application resource path such as `org/app/Main.class`.
    fn layer_for_resource(&self, resource: &str) -> LayersResult<&Layer>;

    fn layer_for_library(&self, library: &Library) -> LayersResult<&Layer>;
}
