//! layertool - compiler for `layers.xml` descriptors
//!
//! A descriptor declares the layers of a layered application image, the order they are
//! stacked in, and which application resources and libraries go into each. This crate
//! validates a descriptor against its schema and compiles it into [`CustomLayers`]:
//! ordered layers plus ordered content selectors that answer "which layer does this
//! item belong to".
//!
//! ```
//! use layertool::{compile_str, Layers, Library};
//!
//! let layers = compile_str(r#"
//!     <layers>
//!         <application>
//!             <into layer="app"><include>org/app/**</include></into>
//!         </application>
//!         <dependencies>
//!             <into layer="deps"/>
//!         </dependencies>
//!         <layerOrder><layer>deps</layer><layer>app</layer></layerOrder>
//!     </layers>
//! "#).unwrap();
//!
//! assert_eq!(layers.layer_for_resource("org/app/Main.class").unwrap().name(), "app");
//! let library = Library::from_coordinates("com.acme:core:1.0".parse().unwrap());
//! assert_eq!(layers.layer_for_library(&library).unwrap().name(), "deps");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{compile, compile_file, compile_str, AssignRequest, AssignUseCase, Assignment};
pub use config::Config;
pub use domain::entities::{CustomLayers, Element, Layer, Layers, Library, LibraryCoordinates};
pub use domain::policies::StandardLayers;
pub use domain::value_objects::{ContentFilter, ContentSelector, SchemaViolation};
pub use error::{ContentKind, LayersError, LayersResult};
