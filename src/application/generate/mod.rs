//! Generate Module
//!
//! Orchestrates a full regeneration of the icon elements.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`GenerateOptions`)
//! - `result` - Run outcome (`GenerateResult`)
//! - `use_case` - Core use case logic (`GenerateUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use icon_elements::application::generate::{GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(LocalFs::new(), Transforms::builtin());
//! let result = use_case.execute(&GenerateOptions::new(source, output)).await?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::GenerateResult;
pub use use_case::GenerateUseCase;
