//! Path management for petpal configuration files.
//!
//! ```text
//! ~/.config/petpal/      # dirs::config_dir() on Linux; platform equivalent elsewhere
//! └── config.toml        # Application configuration
//! ```

use petpal_core::error::{PetPalError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "petpal";
const CONFIG_FILE: &str = "config.toml";

pub struct PetPalPaths;

impl PetPalPaths {
    /// Returns the petpal configuration directory.
    ///
    /// # Errors
    ///
    /// Returns `Config` when the platform has no configuration directory
    /// (typically no home directory).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| PetPalError::config("Cannot find configuration directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
