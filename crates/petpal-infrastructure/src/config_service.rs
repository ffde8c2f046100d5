//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/petpal/config.toml by default).

use crate::paths::PetPalPaths;
use petpal_core::config::RootConfig;
use petpal_core::error::{PetPalError, Result};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file
    File(PathBuf),
    /// The file was absent; built-in defaults are in effect
    Defaults(PathBuf),
}

/// Configuration service that loads and caches the root configuration.
///
/// A missing file is not an error: the defaults are returned and cached.
/// A file that exists but does not parse is reported, so a typo never
/// silently resets the user's settings.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file; the platform default when `None`
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading the platform default location.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading `path` instead of the default location.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// The file this service reads.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => PetPalPaths::config_file(),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// # Errors
    ///
    /// Returns `Io` when the file exists but cannot be read and
    /// `Serialization` when it is not valid TOML for [`RootConfig`].
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| PetPalError::internal("config cache lock poisoned"))?;
            if let Some(cached) = read_lock.as_ref() {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|_| PetPalError::internal("config cache lock poisoned"))?;
        *write_lock = Some(loaded.clone());

        Ok(loaded)
    }

    /// Reports whether [`get_config`](Self::get_config) reads a file or
    /// falls back to defaults.
    pub fn config_source(&self) -> Result<ConfigSource> {
        let path = self.config_path()?;
        if path.exists() {
            Ok(ConfigSource::File(path))
        } else {
            Ok(ConfigSource::Defaults(path))
        }
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        match self.config.write() {
            Ok(mut write_lock) => *write_lock = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }

    fn load_config(&self) -> Result<RootConfig> {
        let config_path = self.config_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: RootConfig = toml::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
