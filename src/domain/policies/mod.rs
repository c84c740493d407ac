//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain entities.

mod standard_layers;

pub use standard_layers::{
    StandardLayers, APPLICATION, DEPENDENCIES, SNAPSHOT_DEPENDENCIES, SPRING_BOOT_LOADER,
};
