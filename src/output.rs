//! Structured JSON output for scripting and piping.
//!
//! When `zz` runs with `--json`, each subcommand serializes one of these
//! structures to stdout instead of printing human-readable text.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use humansize::{DECIMAL, format_size};
use serde::Serialize;

use crate::compat::{ZzCompatible, ZzType};
use crate::ui::Color;

/// What a measured path turned out to be.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    File,
    Directory,
    Missing,
}

impl PathKind {
    const fn key(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
            Self::Missing => "missing",
        }
    }
}

/// Output of `zz size`.
#[derive(Serialize, Debug)]
pub struct JsonSizeReport {
    pub entries: Vec<JsonSizeEntry>,
    pub summary: JsonSizeSummary,
}

/// One measured path.
#[derive(Serialize, Debug)]
pub struct JsonSizeEntry {
    pub path: String,

    pub kind: PathKind,

    /// Bytes on disk, `null` when the path could not be measured.
    pub size: Option<u64>,

    /// Human-readable formatted size (e.g. `"1.23 MB"`).
    pub size_formatted: Option<String>,
}

/// Totals across all measured paths.
#[derive(Serialize, Debug)]
pub struct JsonSizeSummary {
    pub total_entries: usize,
    pub total_size: u64,
    pub total_size_formatted: String,

    /// Per-kind breakdown (key is `"file"`, `"directory"` or `"missing"`).
    pub by_kind: BTreeMap<String, JsonKindSummary>,
}

/// Per-kind count and size.
#[derive(Serialize, Debug)]
pub struct JsonKindSummary {
    pub count: usize,
    pub size: u64,
    pub size_formatted: String,
}

impl JsonSizeEntry {
    /// Measure `path` as a file or directory.
    #[must_use]
    pub fn measure(path: &Path) -> Self {
        let (kind, size) = if path.is_dir() {
            (PathKind::Directory, path.zz().directory_bytes())
        } else if path.exists() {
            (PathKind::File, path.zz().file_bytes())
        } else {
            (PathKind::Missing, None)
        };

        Self {
            path: path.display().to_string(),
            kind,
            size,
            size_formatted: size.map(|bytes| format_size(bytes, DECIMAL)),
        }
    }
}

impl JsonSizeReport {
    #[must_use]
    pub fn from_entries(entries: Vec<JsonSizeEntry>) -> Self {
        let mut by_kind: BTreeMap<String, (usize, u64)> = BTreeMap::new();
        for entry in &entries {
            let slot = by_kind.entry(entry.kind.key().to_string()).or_insert((0, 0));
            slot.0 += 1;
            slot.1 += entry.size.unwrap_or(0);
        }

        let total_size: u64 = entries.iter().filter_map(|e| e.size).sum();

        Self {
            summary: JsonSizeSummary {
                total_entries: entries.len(),
                total_size,
                total_size_formatted: format_size(total_size, DECIMAL),
                by_kind: by_kind
                    .into_iter()
                    .map(|(k, (count, size))| {
                        (
                            k,
                            JsonKindSummary {
                                count,
                                size,
                                size_formatted: format_size(size, DECIMAL),
                            },
                        )
                    })
                    .collect(),
            },
            entries,
        }
    }
}

/// Output of `zz mime`.
#[derive(Serialize, Debug)]
pub struct JsonMimeEntry {
    pub path: String,
    pub mime_type: String,
}

impl JsonMimeEntry {
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        Self {
            path: path.display().to_string(),
            mime_type: path.zz().mime_type(),
        }
    }
}

/// Output of `zz check`: every string predicate for one input.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct JsonCheckReport {
    pub text: String,
    pub email: bool,
    pub url: bool,
    pub schemed_url: bool,
    pub http_url: bool,
    pub https_url: bool,
    pub file_url: bool,
    pub digits: bool,

    /// The text with spaces and newlines removed
    pub compact: String,
    pub url_encoded: String,
    pub url_decoded: String,
}

impl JsonCheckReport {
    #[must_use]
    pub fn for_text(text: &str) -> Self {
        let helpers = text.zz();
        Self {
            text: text.to_string(),
            email: helpers.is_valid_email(),
            url: helpers.is_valid_url(),
            schemed_url: helpers.is_valid_schemed_url(),
            http_url: helpers.is_valid_http_url(),
            https_url: helpers.is_valid_https_url(),
            file_url: helpers.is_valid_file_url(),
            digits: helpers.is_digits(),
            compact: helpers.without_spaces_and_newlines(),
            url_encoded: helpers.url_encoded(),
            url_decoded: helpers.url_decoded(),
        }
    }
}

/// Output of `zz hex`.
#[derive(Serialize, Debug)]
pub struct JsonColor {
    pub input: String,
    pub hex: String,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl JsonColor {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let color = ZzType::<Color>::hex(input);
        let image::Rgba([red, green, blue, _]) = color.to_rgba8();
        Self {
            input: input.to_string(),
            hex: color.zz().hex_string(),
            red,
            green,
            blue,
            alpha: color.alpha,
        }
    }
}

/// Output of `zz date`.
#[derive(Serialize, Debug)]
pub struct JsonDate {
    pub input: Option<String>,
    pub format: String,

    /// RFC 3339 timestamp, `null` when the input did not match the format.
    pub parsed: Option<String>,

    /// The date rendered back with `format`.
    pub formatted: Option<String>,
    pub in_this_year: Option<bool>,
}

impl JsonDate {
    #[must_use]
    pub fn new(input: Option<&str>, format: &str, date: Option<DateTime<Local>>) -> Self {
        Self {
            input: input.map(str::to_string),
            format: format.to_string(),
            parsed: date.map(|d| d.to_rfc3339()),
            formatted: date.and_then(|d| d.zz().string_with_format(format)),
            in_this_year: date.map(|d| d.zz().is_in_this_year()),
        }
    }
}

/// Output of `zz round`.
#[derive(Serialize, Debug)]
pub struct JsonRound {
    pub value: f64,
    pub places: i32,
    pub rounded: f64,
    pub positive: bool,
    pub negative: bool,

    /// Parity of the rounded value, `null` when it is not a whole number.
    pub even: Option<bool>,
}

impl JsonRound {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(value: f64, places: i32) -> Self {
        let rounded = value.zz().rounded(places);
        let whole = rounded.fract().abs() < f64::EPSILON && rounded.abs() < 9.0e15;
        Self {
            value,
            places,
            rounded,
            positive: value.zz().is_positive(),
            negative: value.zz().is_negative(),
            even: whole.then(|| (rounded as i64).zz().is_even()),
        }
    }
}

/// Output of `zz dirs`.
#[derive(Serialize, Debug)]
pub struct JsonDirectories {
    pub home: Option<PathBuf>,
    pub documents: Option<PathBuf>,
    pub library: Option<PathBuf>,
    pub caches: Option<PathBuf>,
    pub temp: PathBuf,
}

impl JsonDirectories {
    #[must_use]
    pub fn current() -> Self {
        Self {
            home: ZzType::<Path>::home_directory(),
            documents: ZzType::<Path>::documents_directory(),
            library: ZzType::<Path>::library_directory(),
            caches: ZzType::<Path>::caches_directory(),
            temp: ZzType::<Path>::temp_directory(),
        }
    }
}

/// Output of the `zz image` subcommands.
#[derive(Serialize, Debug)]
pub struct JsonImage {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub size: u64,
    pub size_formatted: String,
}

impl JsonImage {
    #[must_use]
    pub fn new(path: &Path, (width, height): (u32, u32), size: u64) -> Self {
        Self {
            path: path.display().to_string(),
            width,
            height,
            size,
            size_formatted: format_size(size, DECIMAL),
        }
    }
}

/// Output of generators such as `zz random`, `zz lorem` and `zz pick`.
#[derive(Serialize, Debug)]
pub struct JsonValues {
    pub values: Vec<String>,
}
