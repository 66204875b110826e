//! Command-line interface definition and argument parsing.
//!
//! This module defines the `zz` subcommands and their arguments using
//! [clap](https://docs.rs/clap/).
//!
//! [`Cli::settings`] accepts a [`FileConfig`] reference so that config-file
//! values act as defaults that command-line arguments can override.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use zz_extension::config::{FileConfig, Settings};

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the on-disk size of files and directories (glob patterns allowed)
    Size {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Guess MIME types from file extensions
    Mime {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Run every string check (email, URLs, digits) against a text
    Check { text: String },

    /// Generate random alphanumeric strings
    Random {
        /// Characters per string
        #[arg(short, long)]
        length: Option<usize>,

        /// Number of strings to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Print lorem ipsum text
    Lorem {
        /// Number of characters to print
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Parse `RRGGBB` hex colors
    Hex {
        #[arg(required = true)]
        colors: Vec<String>,
    },

    /// Parse a date, or print the current one when no text is given
    Date {
        text: Option<String>,

        /// `strftime` pattern used to parse and print
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Round a number to a number of decimal places
    Round {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        places: i32,
    },

    /// Pick random items from a list
    Pick {
        #[arg(required = true)]
        items: Vec<String>,

        /// Number of items to pick
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Never pick the same item twice
        #[arg(short, long)]
        unique: bool,
    },

    /// Show the well-known user directories
    Dirs,

    /// Create, resize and compress images
    Image {
        #[command(subcommand)]
        command: ImageCommand,
    },

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `image`.
#[derive(Subcommand, Debug)]
pub enum ImageCommand {
    /// Write a PNG filled with one color
    Solid {
        /// `RRGGBB` hex color
        color: String,

        #[command(flatten)]
        size: SizeArgs,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Scale an image to fit inside a size, keeping its aspect ratio
    Resize {
        input: PathBuf,

        #[command(flatten)]
        size: SizeArgs,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Re-encode an image as JPEG under a size budget
    Compress {
        input: PathBuf,

        /// Budget in kilobytes
        #[arg(short, long)]
        budget: Option<usize>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Width and height in pixels.
#[derive(Args, Debug, Clone, Copy)]
pub struct SizeArgs {
    #[arg(short = 'W', long, default_value_t = 1.0)]
    pub width: f64,

    #[arg(short = 'H', long, default_value_t = 1.0)]
    pub height: f64,
}

/// Subcommands for `config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml, asking before overwriting an existing one
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser, Debug)]
#[command(name = "zz")]
#[command(about = "Everyday helpers for strings, numbers, dates, paths, colors and images")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output results as a single JSON document for scripting/piping
    #[arg(long, global = true)]
    json: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Resolve settings from CLI args and config file.
    ///
    /// Subcommand values (`--length`, `--format`, `--budget`) take priority over
    /// the file, which takes priority over the built-in defaults. `--verbose`
    /// is OR-ed with the file's `logging.verbose`.
    #[must_use]
    pub fn settings(&self, config: &FileConfig) -> Settings {
        let mut settings = Settings::from_file(config);
        settings.verbose |= self.verbose;

        match &self.command {
            Commands::Random {
                length: Some(length),
                ..
            } => settings.random_length = *length,
            Commands::Lorem {
                length: Some(length),
            } => settings.lorem_length = *length,
            Commands::Date {
                format: Some(format),
                ..
            } => settings.date_format.clone_from(format),
            Commands::Image {
                command:
                    ImageCommand::Compress {
                        budget: Some(budget),
                        ..
                    },
            } => settings.image_budget_kb = *budget,
            _ => {}
        }

        settings
    }
}
