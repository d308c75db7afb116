//! Domain Layer
//!
//! Pure generation logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (AssetGroup, SourceAsset, RenderedArtifact, OutputFile)
//! - `value_objects/` - Immutable value types (GroupKind, DerivedNames, Fingerprint)
//! - `services/` - Domain services (dedent, escaping, artifact rendering, collisions)
//! - `ports/` - Interface definitions for infrastructure and collaborators
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O and text transforms go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
