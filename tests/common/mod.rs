//! Common test utilities for icon-elements CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the CLI
//! - Assertion macros: `assert_generated!`, `assert_output_contains!`
//! - Fixtures: Reusable icon content constants

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
