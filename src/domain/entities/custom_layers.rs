//! Custom layers
//!
//! The compiled form of a `layers.xml` descriptor: declared layer order plus the
//! application and library selectors in document order.

use crate::domain::entities::{Layer, Layers, Library};
use crate::domain::policies::StandardLayers;
use crate::domain::value_objects::ContentSelector;
use crate::error::{ContentKind, LayersError, LayersResult};

#[derive(Debug, Clone, PartialEq)]
pub struct CustomLayers {
    layers: Vec<Layer>,
    application_selectors: Vec<ContentSelector<str>>,
    library_selectors: Vec<ContentSelector<Library>>,
}

impl CustomLayers {
    pub fn new(
        layers: Vec<Layer>,
        application_selectors: Vec<ContentSelector<str>>,
        library_selectors: Vec<ContentSelector<Library>>,
    ) -> Self {
        Self {
            layers,
            application_selectors,
            library_selectors,
        }
    }

    pub fn application_selectors(&self) -> &[ContentSelector<str>] {
        &self.application_selectors
    }

    pub fn library_selectors(&self) -> &[ContentSelector<Library>] {
        &self.library_selectors
    }

    /// Whether the descriptor declared a `layerOrder`.
    pub fn has_explicit_order(&self) -> bool {
        !self.layers.is_empty()
    }

    /// Declared order, or the standard order when none was declared.
    pub fn effective_order(&self) -> Vec<Layer> {
        if self.has_explicit_order() {
            self.layers.clone()
        } else {
            StandardLayers::default().layers().to_vec()
        }
    }
}

impl Layers for CustomLayers {
    fn layers(&self) -> &[Layer] {
        &self.layers
    }

    fn layer_for_resource(&self, resource: &str) -> LayersResult<&Layer> {
        self.application_selectors
            .iter()
            .find(|s| s.contains(resource))
            .map(ContentSelector::layer)
            .ok_or_else(|| LayersError::NoLayerFor {
                kind: ContentKind::ApplicationResource,
                item: resource.to_string(),
            })
    }

    fn layer_for_library(&self, library: &Library) -> LayersResult<&Layer> {
        self.library_selectors
            .iter()
            .find(|s| s.contains(library))
            .map(ContentSelector::layer)
            .ok_or_else(|| LayersError::NoLayerFor {
                kind: ContentKind::Library,
                item: library.to_string(),
            })
    }
}
