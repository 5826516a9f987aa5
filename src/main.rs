// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::{Config, LogLevel};
use crate::app_controller::Controller;

mod app_config;
mod app_controller;
mod document_processor;
mod errors;
mod question;
mod roster;
mod text_utils;

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

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate quiz questions from documents (default command)
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Parse a student roster from a CSV or Excel file and print it as JSON
    Roster {
        /// Roster file to parse
        #[arg(value_name = "ROSTER_PATH")]
        roster_path: PathBuf,
    },

    /// Generate shell completions for docquiz
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input document file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output directory for question reports
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Number of vocabulary questions to generate
    #[arg(long)]
    vocabulary: Option<usize>,

    /// Number of fill-in-the-blank questions to generate
    #[arg(long)]
    fill_blank: Option<usize>,

    /// Number of multiple-choice questions to generate
    #[arg(long)]
    multiple_choice: Option<usize>,

    /// Number of reading-comprehension questions to generate
    #[arg(long)]
    reading_comprehension: Option<usize>,

    /// Seed for the random source, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// docquiz - automatic quiz generation from lecture documents
///
/// Extracts plain text from PDF, Word and PowerPoint documents and
/// synthesizes vocabulary, fill-in-the-blank, multiple-choice and
/// reading-comprehension questions from it.
#[derive(Parser, Debug)]
#[command(name = "docquiz")]
#[command(version = "0.1.0")]
#[command(about = "Quiz question generation from lecture documents")]
#[command(long_about = "docquiz extracts text from lecture documents and generates quiz questions from it.

EXAMPLES:
    docquiz lecture.pdf                         # Generate using default config
    docquiz -f lecture.pdf                      # Force overwrite existing reports
    docquiz --seed 42 lecture.docx              # Reproducible generation
    docquiz --multiple-choice 10 slides.pptx    # Override one question count
    docquiz -o reports/ /lectures/              # Process an entire directory
    docquiz roster students.csv                 # Parse a student roster
    docquiz completions bash > docquiz.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

SUPPORTED FORMATS:
    pdf       - PDF documents (two extraction strategies)
    docx      - Word documents
    pptx      - PowerPoint presentations
    csv/xlsx  - Student rosters (roster subcommand only)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input document file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output directory for question reports
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Number of vocabulary questions to generate
    #[arg(long)]
    vocabulary: Option<usize>,

    /// Number of fill-in-the-blank questions to generate
    #[arg(long)]
    fill_blank: Option<usize>,

    /// Number of multiple-choice questions to generate
    #[arg(long)]
    multiple_choice: Option<usize>,

    /// Number of reading-comprehension questions to generate
    #[arg(long)]
    reading_comprehension: Option<usize>,

    /// Seed for the random source, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

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

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI colour code for log level
    fn get_colour_for_level(level: Level) -> &'static str {
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
            let emoji = Self::get_emoji_for_level(record.level());
            let colour = Self::get_colour_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                colour,
                now,
                emoji,
                record.args()
            );
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
            generate(shell, &mut cmd, "docquiz", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Roster { roster_path }) => run_roster(roster_path),
        Some(Commands::Generate(args)) => run_generate(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let generate_args = GenerateArgs {
                input_path,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                vocabulary: cli.vocabulary,
                fill_blank: cli.fill_blank,
                multiple_choice: cli.multiple_choice,
                reading_comprehension: cli.reading_comprehension,
                seed: cli.seed,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_generate(generate_args)
        }
    }
}

/// Run the generation workflow with the given arguments
fn run_generate(args: GenerateArgs) -> Result<()> {
    let mut config = Config::from_file_or_default(&args.config_path)?;

    // Command line overrides take precedence over the config file
    if let Some(count) = args.vocabulary {
        config.generation.vocabulary = count;
    }
    if let Some(count) = args.fill_blank {
        config.generation.fill_blank = count;
    }
    if let Some(count) = args.multiple_choice {
        config.generation.multiple_choice = count;
    }
    if let Some(count) = args.reading_comprehension {
        config.generation.reading_comprehension = count;
    }
    if let Some(level) = args.log_level {
        config.log_level = level.into();
    }

    log::set_max_level(config.log_level.clone().into());

    let controller = Controller::with_config(config)?;
    controller.run(args.input_path, args.output_dir, args.force_overwrite, args.seed)
}

/// Parse a roster file and print the entries as JSON
fn run_roster(roster_path: PathBuf) -> Result<()> {
    let entries = roster::parse_roster(&roster_path)?;
    info!("Parsed {} students from {:?}", entries.len(), roster_path);

    let output = serde_json::to_string_pretty(&entries)?;
    println!("{}", output);
    Ok(())
}
