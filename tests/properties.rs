//! Property tests for layertool.
//!
//! Properties use randomized input generation to protect invariants like
//! "never panics", "order is preserved" and "compilation is deterministic".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/compiler.rs"]
mod compiler;

#[path = "properties/selectors.rs"]
mod selectors;
