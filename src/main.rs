//! # zz
//!
//! Command-line front end for the `zz-extension` helpers.
//!
//! ## Usage
//!
//! ```bash
//! # Disk usage of a few directories
//! zz size ~/Downloads 'target/*'
//!
//! # Validate a string against every check
//! zz check "john@doe.com"
//!
//! # Generate test data
//! zz random --length 24 --count 3
//! zz lorem -l 80
//!
//! # Shrink a photo under 200 KB
//! zz image compress photo.png --budget 200
//! ```

mod cli;

use std::path::{Path, PathBuf};
use std::process::exit;
use std::time::Duration;

use anyhow::{Context, Ok, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand, ImageCommand, SizeArgs};
use colored::Colorize;
use humansize::{DECIMAL, format_size};
use image::RgbaImage;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::Confirm;
use log::{LevelFilter, debug, warn};
use serde::Serialize;
use zz_extension::{
    ZzCompatible, ZzType,
    config::{FileConfig, Settings, expand_tilde},
    output::{
        JsonCheckReport, JsonColor, JsonDate, JsonDirectories, JsonImage, JsonMimeEntry,
        JsonRound, JsonSizeEntry, JsonSizeReport, JsonValues, PathKind,
    },
    ui::{Size, canvas::MAX_PIXELS},
};

/// Entry point for `zz`.
///
/// Errors from [`inner_main`] are printed to stderr before exiting with a
/// non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Parse arguments, resolve settings and run the chosen subcommand.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Commands::Config { command } = &args.command {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let file_config = load_config(json_mode);
    let settings = args.settings(&file_config);

    let level = if settings.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();
    debug!("Resolved settings: {settings:?}");

    match &args.command {
        Commands::Size { paths } => run_size(paths, json_mode),
        Commands::Mime { paths } => {
            let entries: Vec<_> = paths.iter().map(|p| JsonMimeEntry::for_path(p)).collect();
            if json_mode {
                return print_json(&entries);
            }
            for entry in entries {
                println!("{}  {}", entry.mime_type.cyan(), entry.path);
            }
            Ok(())
        }
        Commands::Check { text } => print_check(&JsonCheckReport::for_text(text), json_mode),
        Commands::Random { count, .. } => {
            let values = (0..*count)
                .map(|_| ZzType::<str>::random(settings.random_length))
                .collect();
            print_values(values, json_mode)
        }
        Commands::Lorem { .. } => print_values(
            vec![ZzType::<str>::lorem_ipsum(settings.lorem_length)],
            json_mode,
        ),
        Commands::Hex { colors } => {
            let parsed: Vec<_> = colors.iter().map(|c| JsonColor::parse(c)).collect();
            if json_mode {
                return print_json(&parsed);
            }
            for color in parsed {
                println!(
                    "{}  rgb({}, {}, {})  {}",
                    color.hex.bold(),
                    color.red,
                    color.green,
                    color.blue,
                    color.input.dimmed()
                );
            }
            Ok(())
        }
        Commands::Date { text, .. } => run_date(text.as_deref(), &settings.date_format, json_mode),
        Commands::Round { value, places } => {
            let round = JsonRound::new(*value, *places);
            if json_mode {
                return print_json(&round);
            }
            println!("{}", round.rounded);
            Ok(())
        }
        Commands::Pick {
            items,
            count,
            unique,
        } => {
            let picked = items
                .zz()
                .sample_many(*count, *unique)
                .unwrap_or_default()
                .into_iter()
                .cloned()
                .collect();
            print_values(picked, json_mode)
        }
        Commands::Dirs => print_directories(&JsonDirectories::current(), json_mode),
        Commands::Image { command } => run_image(command, &settings, json_mode),
        Commands::Config { command } => handle_config_command(command),
    }
}

// ── Subcommands ─────────────────────────────────────────────────────────

/// Measure every path (after glob expansion) and print a size report.
fn run_size(patterns: &[String], json_mode: bool) -> Result<()> {
    let paths = expand_patterns(patterns)?;

    let progress = if json_mode {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let entries = paths
        .iter()
        .map(|path| {
            progress.set_message(format!("Measuring {}", path.display()));
            JsonSizeEntry::measure(path)
        })
        .collect();
    progress.finish_and_clear();

    let report = JsonSizeReport::from_entries(entries);
    if json_mode {
        return print_json(&report);
    }

    for entry in &report.entries {
        match (&entry.kind, &entry.size_formatted) {
            (PathKind::Missing, _) => println!("{:>10}  {}", "missing".red(), entry.path),
            (_, None) => println!("{:>10}  {}", "unreadable".yellow(), entry.path),
            (PathKind::Directory, Some(size)) => {
                println!("{:>10}  {}/", size.bright_white(), entry.path.bold());
            }
            (PathKind::File, Some(size)) => println!("{:>10}  {}", size.bright_white(), entry.path),
        }
    }

    if report.entries.len() > 1 {
        println!(
            "{:>10}  {}",
            report.summary.total_size_formatted.bright_green().bold(),
            "total".bold()
        );
    }
    Ok(())
}

/// Expand glob patterns; plain paths pass through untouched.
///
/// A pattern matching nothing is kept as-is so that it is reported as missing.
fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        if !pattern.contains(['*', '?', '[']) {
            paths.push(expand_tilde(Path::new(pattern)));
            continue;
        }

        let before = paths.len();
        for entry in glob::glob(pattern).with_context(|| format!("Invalid glob pattern '{pattern}'"))? {
            match entry {
                std::result::Result::Ok(path) => paths.push(path),
                Err(e) => warn!("Skipping {}: {}", e.path().display(), e.error()),
            }
        }

        if paths.len() == before {
            warn!("'{pattern}' matched nothing");
            paths.push(PathBuf::from(pattern));
        }
    }

    Ok(paths)
}

fn run_date(text: Option<&str>, format: &str, json_mode: bool) -> Result<()> {
    let date = match text {
        Some(text) => text.zz().date(format),
        None => Some(chrono::Local::now()),
    };
    let report = JsonDate::new(text, format, date);

    if json_mode {
        return print_json(&report);
    }

    let (Some(parsed), Some(formatted)) = (&report.parsed, &report.formatted) else {
        bail!(
            "'{}' does not match the format '{format}'",
            text.unwrap_or_default()
        );
    };
    println!("{}", formatted.bold());
    println!("{}", parsed.dimmed());
    if report.in_this_year == Some(false) {
        println!("{}", "(not this year)".yellow());
    }
    Ok(())
}

fn run_image(command: &ImageCommand, settings: &Settings, json_mode: bool) -> Result<()> {
    let (path, dimensions) = match command {
        ImageCommand::Solid {
            color,
            size,
            output,
        } => {
            let color = ZzType::<zz_extension::ui::Color>::hex(color);
            let Some(image) = ZzType::<RgbaImage>::solid(color, to_size(*size)) else {
                bail!("Image size must be positive and at most {MAX_PIXELS} pixels, got {}", to_size(*size));
            };
            let path = output_path(output.as_deref(), settings, "solid.png")?;
            image
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            (path, image.dimensions())
        }
        ImageCommand::Resize {
            input,
            size,
            output,
        } => {
            let image = open_image(input)?;
            let Some(resized) = image.zz().resize_to_fit(to_size(*size)) else {
                bail!("Cannot fit {} into {}", input.display(), to_size(*size));
            };
            let default_name = derived_name(input, "resized", "png");
            let path = output_path(output.as_deref(), settings, &default_name)?;
            resized
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            (path, resized.dimensions())
        }
        ImageCommand::Compress { input, output, .. } => {
            let image = open_image(input)?;
            let Some(data) = image.zz().resize_to_kilobytes(settings.image_budget_kb) else {
                bail!("Failed to encode {} as JPEG", input.display());
            };
            if data.len() > settings.image_budget_kb.saturating_mul(1024) && !json_mode {
                eprintln!(
                    "{} {} is still over the {} KB budget at the lowest quality",
                    "Warning:".yellow(),
                    format_size(data.len(), DECIMAL),
                    settings.image_budget_kb
                );
            }
            let default_name = derived_name(input, "compressed", "jpg");
            let path = output_path(output.as_deref(), settings, &default_name)?;
            std::fs::write(&path, &data)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            (path, image.dimensions())
        }
    };

    let written = path.zz().file_bytes().unwrap_or(0);
    let report = JsonImage::new(&path, dimensions, written);
    if json_mode {
        return print_json(&report);
    }

    println!(
        "{} {} ({}x{}, {})",
        "Wrote".green(),
        report.path.bold(),
        report.width,
        report.height,
        report.size_formatted.bright_white()
    );
    Ok(())
}

fn open_image(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(image.to_rgba8())
}

const fn to_size(size: SizeArgs) -> Size {
    Size::new(size.width, size.height)
}

/// `photo.png` becomes `photo-<suffix>.<extension>`.
fn derived_name(input: &Path, suffix: &str, extension: &str) -> String {
    let stem = input
        .file_stem()
        .map_or_else(|| "image".into(), |s| s.to_string_lossy());
    format!("{stem}-{suffix}.{extension}")
}

/// The explicit output path, else `file_name` in the configured image directory,
/// else `file_name` in the current directory.
fn output_path(explicit: Option<&Path>, settings: &Settings, file_name: &str) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(expand_tilde(path));
    }

    let Some(dir) = &settings.image_output else {
        return Ok(PathBuf::from(file_name));
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create image directory {}", dir.display()))?;
    Ok(dir.join(file_name))
}

// ── Printing ────────────────────────────────────────────────────────────

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_values(values: Vec<String>, json_mode: bool) -> Result<()> {
    if json_mode {
        return print_json(&JsonValues { values });
    }
    for value in values {
        println!("{value}");
    }
    Ok(())
}

fn print_check(report: &JsonCheckReport, json_mode: bool) -> Result<()> {
    if json_mode {
        return print_json(report);
    }

    let mark = |ok: bool| if ok { "yes".green() } else { "no".red() };
    println!("email       {}", mark(report.email));
    println!("url         {}", mark(report.url));
    println!("schemed url {}", mark(report.schemed_url));
    println!("http url    {}", mark(report.http_url));
    println!("https url   {}", mark(report.https_url));
    println!("file url    {}", mark(report.file_url));
    println!("digits      {}", mark(report.digits));
    println!();
    println!("compact     {}", report.compact);
    println!("encoded     {}", report.url_encoded);
    println!("decoded     {}", report.url_decoded);
    Ok(())
}

fn print_directories(dirs: &JsonDirectories, json_mode: bool) -> Result<()> {
    if json_mode {
        return print_json(dirs);
    }

    let show = |path: Option<&PathBuf>| {
        path.map_or_else(|| "(unavailable)".dimmed().to_string(), |p| p.display().to_string())
    };
    println!("home      {}", show(dirs.home.as_ref()));
    println!("documents {}", show(dirs.documents.as_ref()));
    println!("library   {}", show(dirs.library.as_ref()));
    println!("caches    {}", show(dirs.caches.as_ref()));
    println!("temp      {}", dirs.temp.display());
    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# zz-extension configuration
# All values shown are their defaults. Uncomment and change as needed.

# strftime pattern used by `zz date`
# date_format = "%d/%m/%Y %H:%M"

[random]
# Characters per `zz random` string
# length = 18

[lorem]
# Characters printed by `zz lorem` (445 is the full paragraph)
# length = 445

[image]
# Size budget in kilobytes for `zz image compress`
# budget = 1024

# Directory generated images are written to (defaults to the current directory)
# output = "~/Pictures/zz"

[logging]
# Log debug details to stderr
# verbose = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, marking defaulted keys.
fn format_config(config: &FileConfig) -> String {
    fn show<T: std::fmt::Display>(val: Option<T>, default: T) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let resolved = Settings::from_file(config);
    let output = resolved.image_output.as_ref().map_or_else(
        || "\".\"  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );

    format!(
        "\
date_format = {date_format}

[random]
length      = {random_length}

[lorem]
length      = {lorem_length}

[image]
budget      = {budget}
output      = {output}

[logging]
verbose     = {verbose}",
        date_format = show(
            config.date_format.as_deref().map(|f| format!("\"{f}\"")),
            format!("\"{}\"", resolved.date_format)
        ),
        random_length = show(config.random.length, resolved.random_length),
        lorem_length = show(config.lorem.length, resolved.lorem_length),
        budget = show(config.image.budget, resolved.image_budget_kb),
        verbose = show(config.logging.verbose, resolved.verbose),
    )
}

/// Write the config template, asking before replacing an existing file.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        let overwrite = Confirm::new(&format!(
            "Config file already exists at {}. Overwrite it?",
            path.display()
        ))
        .with_default(false)
        .prompt()?;

        if !overwrite {
            println!("Keeping the existing config file.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        std::result::Result::Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
