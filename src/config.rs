//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/numbase/numbase.toml`
//! 3. Environment variables: `NUMBASE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::NumeralSystem;

/// Errors while loading or writing configuration.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot load config: {0}")]
    Load(#[from] config::ConfigError),

    #[error("cannot write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("no config directory available on this platform")]
    NoConfigDir,
}

/// Unified configuration for numbase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Source system assumed when none is given (default: decimal)
    pub default_source: NumeralSystem,
    /// Target system assumed when none is given (default: binary)
    pub default_target: NumeralSystem,
    /// Print the conversion steps with every result
    pub show_steps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_source: NumeralSystem::Decimal,
            default_target: NumeralSystem::Binary,
            show_steps: false,
        }
    }
}

/// Get the XDG config directory for numbase.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "numbase").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("numbase.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// `config_file` overrides the global config location (used by tests);
    /// when `None`, the global file is merged if it exists. `NUMBASE_*`
    /// environment variables win over both.
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder =
            Config::builder().add_source(Config::try_from(&Settings::default())?);

        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path.to_path_buf()).required(true));
            }
            None => {
                if let Some(path) = global_config_path() {
                    builder = builder.add_source(File::from(path).required(false));
                }
            }
        }

        let settings = builder
            .add_source(Environment::with_prefix("NUMBASE").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Render the settings as TOML (used by `config show` and the template).
    pub fn to_toml(&self) -> String {
        // Settings serializes to plain scalars, this cannot fail
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

/// Create the global config file from the compiled defaults.
/// Fails if the file already exists.
pub fn init_global_config() -> Result<PathBuf, SettingsError> {
    let dir = global_config_dir().ok_or(SettingsError::NoConfigDir)?;
    let path = dir.join("numbase.toml");
    if path.exists() {
        return Err(SettingsError::AlreadyExists(path));
    }
    std::fs::create_dir_all(&dir)?;

    let template = format!(
        "# numbase configuration\n\
         # systems: binary | octal | decimal | hexadecimal\n\
         {}",
        Settings::default().to_toml()
    );
    std::fs::write(&path, template)?;
    Ok(path)
}
