//! Domain Services
//!
//! Stateless, pure services used by the generate use case.
//!
//! - `dedent` - Indentation normalizer, templates, caller-owned cache
//! - `escaping` - Single-quoted literal escaping
//! - `artifact` - Module/declaration rendering
//! - `collisions` - Name collision detection per output scope

pub mod artifact;
pub mod collisions;
pub mod dedent;
pub mod escaping;

pub use artifact::{host_style, inline_content, render_artifact};
pub use collisions::CollisionDetector;
pub use dedent::{dedent, DedentCache, Template};
pub use escaping::escape_single_quotes;
