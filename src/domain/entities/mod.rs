//! Domain Entities
//!
//! - `AssetGroup` - An input subdirectory (size/style variant)
//! - `SourceAsset` - One SVG file and its content
//! - `RenderedArtifact` - Module + declaration sources for one asset
//! - `OutputFile` - A file ready to be written

mod artifact;
mod asset;
mod output_file;

pub use artifact::{RenderedArtifact, DECLARATION_EXTENSION, MODULE_EXTENSION};
pub use asset::{AssetGroup, SourceAsset};
pub use output_file::OutputFile;
