//! Configuration for the document generation service
//!
//! Settings are read from `docfill.toml`. Everything has a default, so a
//! missing config file yields a working setup rooted at `./media`.

pub mod consts;
pub mod model;

pub use model::{Config, GenerateConfig, StorageConfig};
