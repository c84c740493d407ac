//! Standard Layers Policy
//!
//! The implicit layer set used when no descriptor (or no `layerOrder`) is supplied.
//! Loader classes and snapshot dependencies get their own layers so application
//! changes invalidate as little of the image as possible.

use crate::domain::entities::{Layer, Layers, Library};
use crate::error::LayersResult;

pub const DEPENDENCIES: &str = "dependencies";
pub const SPRING_BOOT_LOADER: &str = "spring-boot-loader";
pub const SNAPSHOT_DEPENDENCIES: &str = "snapshot-dependencies";
pub const APPLICATION: &str = "application";

const LOADER_PREFIX: &str = "org/springframework/boot/loader/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardLayers {
    // dependencies, loader, snapshot-dependencies, application
    layers: [Layer; 4],
}

impl Default for StandardLayers {
    fn default() -> Self {
        Self {
            layers: [
                Layer::new(DEPENDENCIES),
                Layer::new(SPRING_BOOT_LOADER),
                Layer::new(SNAPSHOT_DEPENDENCIES),
                Layer::new(APPLICATION),
            ],
        }
    }
}

impl StandardLayers {
    fn dependencies(&self) -> &Layer {
        &self.layers[0]
    }

    fn loader(&self) -> &Layer {
        &self.layers[1]
    }

    fn snapshot_dependencies(&self) -> &Layer {
        &self.layers[2]
    }

    fn application(&self) -> &Layer {
        &self.layers[3]
    }
}

impl Layers for StandardLayers {
    fn layers(&self) -> &[Layer] {
        &self.layers
    }

    fn layer_for_resource(&self, resource: &str) -> LayersResult<&Layer> {
        if resource.starts_with(LOADER_PREFIX) {
            Ok(self.loader())
        } else {
            Ok(self.application())
        }
    }

    fn layer_for_library(&self, library: &Library) -> LayersResult<&Layer> {
        if library.is_local() {
            return Ok(self.application());
        }
        if is_snapshot(library) {
            Ok(self.snapshot_dependencies())
        } else {
            Ok(self.dependencies())
        }
    }
}

fn is_snapshot(library: &Library) -> bool {
    match library.coordinates().and_then(|c| c.version.as_deref()) {
        Some(version) => version.contains("SNAPSHOT"),
        None => library.name().contains("SNAPSHOT."),
    }
}
