//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompileUseCase` - Read, parse, validate and compile a `layers.xml` descriptor
//! - `AssignUseCase` - Place resources and libraries into layers

pub mod assign;
pub mod compile;

pub use assign::{AssignRequest, AssignUseCase, Assignment};
pub use compile::{compile, compile_file, compile_str, CompileUseCase};
