//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod document_validator;
mod layers_compiler;

pub use document_validator::DocumentValidator;
pub use layers_compiler::{application_selectors, layer_order, library_selectors, LayersCompiler};
