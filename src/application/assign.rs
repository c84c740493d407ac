//! Assign use case
//!
//! Places application resources and libraries into layers using any [`Layers`]
//! implementation: a compiled descriptor or the standard layers.

use serde::Serialize;

use crate::domain::entities::{Layer, Layers, Library};
use crate::error::{ContentKind, LayersResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub item: String,
    #[serde(serialize_with = "serialize_kind")]
    pub kind: ContentKind,
    pub layer: Layer,
}

fn serialize_kind<S: serde::Serializer>(kind: &ContentKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(match kind {
        ContentKind::ApplicationResource => "resource",
        ContentKind::Library => "library",
    })
}

#[derive(Debug, Clone, Default)]
pub struct AssignRequest {
    pub resources: Vec<String>,
    pub libraries: Vec<Library>,
}

pub struct AssignUseCase<'a, L: Layers + ?Sized> {
    layers: &'a L,
}

impl<'a, L: Layers + ?Sized> AssignUseCase<'a, L> {
    pub fn new(layers: &'a L) -> Self {
        Self { layers }
    }

    /// Resources first, then libraries, each in request order. Stops at the first item
    /// no layer claims.
    pub fn assign(&self, request: &AssignRequest) -> LayersResult<Vec<Assignment>> {
        let mut assignments = Vec::with_capacity(request.resources.len() + request.libraries.len());

        for resource in &request.resources {
            let layer = self.layers.layer_for_resource(resource)?;
            tracing::trace!(resource = %resource, %layer, "assigned resource");
            assignments.push(Assignment {
                item: resource.clone(),
                kind: ContentKind::ApplicationResource,
                layer: layer.clone(),
            });
        }

        for library in &request.libraries {
            let layer = self.layers.layer_for_library(library)?;
            tracing::trace!(library = %library, %layer, "assigned library");
            assignments.push(Assignment {
                item: library.to_string(),
                kind: ContentKind::Library,
                layer: layer.clone(),
            });
        }

        Ok(assignments)
    }
}
