//! Infrastructure layer for PetPal.
//!
//! Resolves where PetPal keeps its files and loads `config.toml`.

pub mod config_service;
pub mod paths;

pub use config_service::{ConfigService, ConfigSource};
pub use paths::PetPalPaths;
