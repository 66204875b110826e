//! Configuration for the `zz` command-line front end.
//!
//! [`file`] reads the optional TOML file; [`Settings`] is the fully resolved
//! result after command-line flags have been layered on top.

pub mod file;

use std::path::PathBuf;

pub use file::{FileConfig, expand_tilde};

use crate::ZzType;
use crate::date::DEFAULT_DATE_FORMAT;

/// Length of `zz random` output when neither flag nor file sets one.
pub const DEFAULT_RANDOM_LENGTH: usize = 18;

/// Size budget of `zz image compress`, in kilobytes.
pub const DEFAULT_IMAGE_BUDGET_KB: usize = 1024;

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub date_format: String,
    pub random_length: usize,
    pub lorem_length: usize,
    pub image_budget_kb: usize,
    /// Directory for generated images without an explicit output path
    pub image_output: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            random_length: DEFAULT_RANDOM_LENGTH,
            lorem_length: ZzType::<str>::lorem_ipsum_full().chars().count(),
            image_budget_kb: DEFAULT_IMAGE_BUDGET_KB,
            image_output: None,
            verbose: false,
        }
    }
}

impl Settings {
    /// Settings from `file`, with built-in defaults for absent keys.
    #[must_use]
    pub fn from_file(file: &FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            date_format: file.date_format.clone().unwrap_or(defaults.date_format),
            random_length: file.random.length.unwrap_or(defaults.random_length),
            lorem_length: file.lorem.length.unwrap_or(defaults.lorem_length),
            image_budget_kb: file.image.budget.unwrap_or(defaults.image_budget_kb),
            image_output: file.image.output.as_deref().map(expand_tilde),
            verbose: file.logging.verbose.unwrap_or(defaults.verbose),
        }
    }
}
