//! Configuration file support for persistent defaults.
//!
//! Settings are read from a TOML file at `~/.config/zz-extension/config.toml`
//! (or the platform-specific equivalent). Values in the file act as defaults
//! that command-line flags override.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > built-in default**.
//!
//! # Example config
//!
//! ```toml
//! date_format = "%Y-%m-%d %H:%M"
//!
//! [random]
//! length = 24
//!
//! [lorem]
//! length = 120
//!
//! [image]
//! budget = 200   # kilobytes
//! output = "~/Pictures/zz"
//!
//! [logging]
//! verbose = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so that absent keys fall through to the next
/// layer.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default `strftime` pattern for `zz date`
    pub date_format: Option<String>,

    #[serde(default)]
    pub random: FileLengthConfig,

    #[serde(default)]
    pub lorem: FileLengthConfig,

    #[serde(default)]
    pub image: FileImageConfig,

    #[serde(default)]
    pub logging: FileLoggingConfig,
}

/// A `[section]` holding only a default length.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileLengthConfig {
    pub length: Option<usize>,
}

/// Image options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileImageConfig {
    /// Size budget in kilobytes for `zz image compress`
    pub budget: Option<usize>,

    /// Directory generated images are written to when no output path is given
    pub output: Option<PathBuf>,
}

/// Logging options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    pub verbose: Option<bool>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// `None` if the platform configuration directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("zz-extension").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// A missing file yields the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        Self::load_from(&path)
    }

    /// Load configuration from `path`, defaulting when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}
