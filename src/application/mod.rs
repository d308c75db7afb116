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
//! - `GenerateUseCase` - Orchestrates a run (cleanup, prepare, generate, commit)

pub mod generate;

pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase};
