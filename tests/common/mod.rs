//! Common test utilities for layertool CLI tests.
//!
//! - `TestEnv`: isolated project and config directories plus a runner for the binary
//! - Fixtures: reusable descriptor content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
