// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::catalog_builder::CatalogBuilder;
use crate::file_utils::FileManager;

mod app_config;
mod asset_resolver;
mod catalog_builder;
mod errors;
mod file_utils;
mod filters;
mod models;
mod name_utils;
mod stamps;
mod translation_store;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the character catalog (default command)
    #[command(alias = "run")]
    Build(BuildArgs),

    /// Generate shell completions for charcat
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Directory holding the structured input files
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Resource root containing the image assets
    #[arg(short, long)]
    res_root: Option<PathBuf>,

    /// Output path for the serialized catalog
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// charcat - Character Catalog Builder
///
/// An offline data-preparation tool that merges per-character game metadata
/// with curated overrides and emits a normalized, validated catalog.
#[derive(Parser, Debug)]
#[command(name = "charcat")]
#[command(version = "1.0.0")]
#[command(about = "Character catalog data-preparation tool")]
#[command(long_about = "charcat merges raw character records, curated group definitions and an
existing translation store into a normalized catalog: multilingual names,
deduplicated portrait mappings validated against on-disk assets, stamp
listings and filterable group listings.

EXAMPLES:
    charcat                                    # Build using default config
    charcat -d resources/data -r resources/res # Override input locations
    charcat -o out/catalog.json                # Write the catalog elsewhere
    charcat --log-level debug                  # Verbose run
    charcat completions bash > charcat.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the structured input files
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Resource root containing the image assets
    #[arg(short, long)]
    res_root: Option<PathBuf>,

    /// Output path for the serialized catalog
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
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
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
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

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "charcat", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Build(args)) => run_build(args),
        None => {
            // Default behavior - use top-level args
            let build_args = BuildArgs {
                data_dir: cli.data_dir,
                res_root: cli.res_root,
                output: cli.output,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_build(build_args)
        }
    }
}

fn run_build(options: BuildArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Override config with CLI options if provided
        if let Some(data_dir) = &options.data_dir {
            config.data_dir = data_dir.clone();
        }

        if let Some(res_root) = &options.res_root {
            config.res_root = res_root.clone();
        }

        if let Some(output) = &options.output {
            config.catalog_output = output.clone();
        }

        // Update log level in config if specified via command line
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        if let Some(data_dir) = &options.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(res_root) = &options.res_root {
            config.res_root = res_root.clone();
        }
        if let Some(output) = &options.output {
            config.catalog_output = output.clone();
        }
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(level_filter(&config.log_level));
    }

    let output_path = config.catalog_output.clone();

    // Create the builder and run the pipeline
    let builder = CatalogBuilder::with_config(config)?;
    let catalog = builder.run()?;

    if catalog.characters.is_empty() {
        warn!("Catalog run produced no characters");
    }

    // Persist the catalog for downstream consumers
    let catalog_json = serde_json::to_string_pretty(&catalog)
        .context("Failed to serialize catalog to JSON")?;
    FileManager::write_to_file(&output_path, &catalog_json)?;

    info!("Catalog written to {:?}", output_path);

    Ok(())
}
