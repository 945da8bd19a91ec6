// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use vttkit::app_config::{Config, LogLevel};
use vttkit::file_utils::FileManager;
use vttkit::{CaptionFormat, WebVtt};

/// CLI Wrapper for CaptionFormat to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliCaptionFormat {
    Vtt,
    Srt,
    Sbv,
}

impl From<CliCaptionFormat> for CaptionFormat {
    fn from(cli_format: CliCaptionFormat) -> Self {
        match cli_format {
            CliCaptionFormat::Vtt => CaptionFormat::WebVtt,
            CliCaptionFormat::Srt => CaptionFormat::Srt,
            CliCaptionFormat::Sbv => CaptionFormat::Sbv,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert caption files to WebVTT
    Convert(ConvertArgs),

    /// Print the parsed captions of a file as JSON
    Inspect(InspectArgs),

    /// Generate shell completions for vttkit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input caption file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output file or directory (defaults to the input location)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input format (detected from the extension when omitted)
    #[arg(long, value_enum)]
    format: Option<CliCaptionFormat>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input caption file
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Input format (detected from the extension when omitted)
    #[arg(long, value_enum)]
    format: Option<CliCaptionFormat>,
}

/// vttkit - caption conversion to WebVTT
///
/// Reads WebVTT, SubRip and YouTube SBV caption files and writes canonical WebVTT.
#[derive(Parser, Debug)]
#[command(name = "vttkit")]
#[command(version)]
#[command(about = "Caption conversion to WebVTT")]
#[command(long_about = "vttkit reads WebVTT, SubRip (.srt) and YouTube (.sbv) captions and writes canonical WebVTT.

EXAMPLES:
    vttkit convert movie.srt                    # Writes movie.vtt next to the input
    vttkit convert movie.sbv -o out/            # Writes out/movie.vtt
    vttkit convert -f captions/                 # Converts a whole directory, overwriting
    vttkit inspect movie.vtt                    # Dumps captions as JSON
    vttkit completions bash > vttkit.bash       # Generate bash completions

CONFIGURATION:
    Settings are read from conf.json by default. You can specify a different
    config file with --config-path. Defaults are used when the file does not exist.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_default(&cli.config_path)?;
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }
    config.validate().context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "vttkit", &mut std::io::stdout());
            Ok(())
        }
        Commands::Convert(args) => run_convert(args, &config),
        Commands::Inspect(args) => run_inspect(args, &config),
    }
}

/// Pick the input format: explicit flag, then config, then file extension
fn resolve_format(path: &Path, cli_format: Option<CliCaptionFormat>, config: &Config) -> Result<CaptionFormat> {
    cli_format
        .map(CaptionFormat::from)
        .or(config.conversion.input_format)
        .or_else(|| FileManager::detect_format(path))
        .ok_or_else(|| anyhow!("Cannot detect caption format of {:?}, use --format", path))
}

fn run_convert(args: ConvertArgs, config: &Config) -> Result<()> {
    let force_overwrite = args.force_overwrite || config.conversion.force_overwrite;
    let output = args
        .output
        .clone()
        .or_else(|| config.conversion.output_dir.as_ref().map(PathBuf::from));

    if args.input_path.is_file() {
        convert_file(&args.input_path, output.as_deref(), args.format, config, force_overwrite)?;
        return Ok(());
    }

    if !args.input_path.is_dir() {
        return Err(anyhow!("Input path does not exist: {:?}", args.input_path));
    }

    // A directory input always writes into a directory
    if let Some(dir) = &output {
        FileManager::ensure_dir(dir)
            .with_context(|| format!("Failed to create output directory: {:?}", dir))?;
    }

    info!("Converting caption files in: {:?}", args.input_path);
    let files = FileManager::find_caption_files(&args.input_path)?;

    let mut converted = 0;
    let mut failed = 0;
    for path in &files {
        match convert_file(path, output.as_deref(), args.format, config, force_overwrite) {
            Ok(true) => converted += 1,
            Ok(false) => {}
            Err(e) => {
                error!("Error converting {:?}: {:#}", path, e);
                failed += 1;
            }
        }
    }

    info!("Finished: {} converted, {} failed, {} found", converted, failed, files.len());
    Ok(())
}

/// Convert one file; returns whether an output file was written
fn convert_file(
    input: &Path,
    output: Option<&Path>,
    cli_format: Option<CliCaptionFormat>,
    config: &Config,
    force_overwrite: bool,
) -> Result<bool> {
    let format = resolve_format(input, cli_format, config)?;
    let target = FileManager::resolve_vtt_path(Some(input), output)?;

    if target.exists() && !force_overwrite {
        warn!("Output file already exists: {:?}. Use -f to force overwrite.", target);
        return Ok(false);
    }

    debug!("Reading {:?} as {}", input, format.display_name());
    let mut document = WebVtt::from_file(input, format)
        .with_context(|| format!("Failed to read captions from {:?}", input))?;

    let written = document
        .save(Some(&target))
        .with_context(|| format!("Failed to write {:?}", target))?;

    info!("Success: {:?}", written);
    Ok(true)
}

fn run_inspect(args: InspectArgs, config: &Config) -> Result<()> {
    let format = resolve_format(&args.input_path, args.format, config)?;
    let document = WebVtt::from_file(&args.input_path, format)
        .with_context(|| format!("Failed to read captions from {:?}", args.input_path))?;

    let report = serde_json::json!({
        "format": format,
        "captions": document.captions,
        "styles": document.styles,
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
