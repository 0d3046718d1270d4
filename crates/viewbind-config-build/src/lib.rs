//! Build configuration read from `viewbind.toml` next to the consuming
//! crate's manifest. Every key is optional and a missing file means defaults.

use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Configuration file name, resolved against the manifest directory.
pub const CONFIG_FILE: &str = "viewbind.toml";

/// Component every bound field type must descend from by default.
pub const DEFAULT_BASE_TYPE: &str = "viewbind::ui::View";

/// Index file that `include!`s every generated unit.
pub const DEFAULT_OUTPUT: &str = "viewbind.rs";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

///
/// InvalidFieldPolicy
///
/// What the emitter does with a bound field whose type fails the base type
/// check. The diagnostic is recorded under every policy.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum InvalidFieldPolicy {
    /// Leave the field out of the generated method.
    #[default]
    Skip,

    /// Emit no unit at all for the host.
    Abort,

    /// Emit the assignment anyway, naming the type by its full path.
    Emit,
}

///
/// ConfigFile
///

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    build: BuildConfig,
}

///
/// BuildConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub base_type: String,
    pub invalid_fields: InvalidFieldPolicy,
    pub output: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_type: DEFAULT_BASE_TYPE.to_string(),
            invalid_fields: InvalidFieldPolicy::default(),
            output: DEFAULT_OUTPUT.to_string(),
        }
    }
}

impl BuildConfig {
    /// Load `viewbind.toml` from `manifest_dir`, or defaults when absent.
    pub fn load(manifest_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = manifest_dir.as_ref().join(CONFIG_FILE);

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        Self::parse(&text).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Parse configuration text.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(text)?;

        Ok(file.build)
    }
}

///
/// TESTS
///
