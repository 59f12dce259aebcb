// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use subcue::app_config::{Config, LogLevel};
use subcue::batch_converter::BatchConverter;
use subcue::episode_loader::{EpisodeLoader, FileProvider, HttpProvider, ResourceProvider};

/// CLI wrapper for LogLevel to implement ValueEnum
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

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert the configured SRT sources to JSON artifacts
    Convert(ConvertArgs),

    /// Load an episode through the loader and print its cues
    Show(ShowArgs),

    /// Generate shell completions for subcue
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Override the source directory from the config
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Override the output directory from the config
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Episode key (e.g. S01E01), or an SRT locator with --srt
    key: String,

    /// Base directory or URL that subtitle locators resolve against
    #[arg(short, long, default_value = ".")]
    base: String,

    /// Treat KEY as a raw SRT locator and parse it directly
    #[arg(long)]
    srt: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subcue - subtitle conversion and loading
///
/// Converts SRT subtitle files to canonical JSON artifacts and serves
/// normalized cue sequences by episode key.
#[derive(Parser, Debug)]
#[command(name = "subcue")]
#[command(version)]
#[command(about = "Subtitle ingestion, normalization, and batch conversion")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
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
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize once at info; the level is adjusted after config parsing
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subcue", &mut std::io::stdout());
            Ok(())
        }
        Commands::Convert(args) => run_convert(args),
        Commands::Show(args) => run_show(args).await,
    }
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    let mut config = Config::from_file_or_default(&args.config_path)?;

    if let Some(dir) = args.source_dir {
        config.source_dir = dir;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    let log_level = args
        .log_level
        .map(LogLevel::from)
        .unwrap_or_else(|| config.log_level.clone());
    log::set_max_level(level_filter(&log_level));

    info!(
        "Converting {} episode(s) from {} into {}",
        config.episodes.len(),
        config.source_dir.display(),
        config.output_dir.display()
    );

    let report = BatchConverter::new(config).run()?;
    if report.had_failures() {
        return Err(anyhow!("{} source file(s) failed to convert", report.failed));
    }

    Ok(())
}

async fn run_show(args: ShowArgs) -> Result<()> {
    if let Some(level) = args.log_level {
        log::set_max_level(level_filter(&LogLevel::from(level)));
    }

    let provider: Arc<dyn ResourceProvider> =
        if args.base.starts_with("http://") || args.base.starts_with("https://") {
            Arc::new(HttpProvider::new(args.base.clone()))
        } else {
            Arc::new(FileProvider::new(args.base.clone()))
        };
    let loader = EpisodeLoader::with_default_catalog(provider);

    let cues = if args.srt {
        loader.load_srt(&args.key).await?
    } else {
        loader.load_episode(&args.key).await?.to_vec()
    };

    for cue in &cues {
        println!("{}", cue);
    }
    info!("{} cue(s) loaded", cues.len());

    Ok(())
}
