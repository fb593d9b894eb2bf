//! CLI argument parsing using clap

use crate::config::checkrun_toml::{ColorOption, OutputFormat};
use crate::types::DiscoveryStrategy;
use clap::{Parser, Subcommand, ValueEnum};

/// Output format for checkrun commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Jsonl => OutputFormat::Jsonl,
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for ColorOption {
    fn from(value: ColorChoice) -> Self {
        match value {
            ColorChoice::Auto => ColorOption::Auto,
            ColorChoice::Always => ColorOption::Always,
            ColorChoice::Never => ColorOption::Never,
        }
    }
}

/// File discovery strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiscoveryMode {
    /// Tracked plus untracked-but-not-ignored files
    VcsAware,
    /// Raw recursive walk, ignore rules off
    FilesystemWalk,
}

impl From<DiscoveryMode> for DiscoveryStrategy {
    fn from(value: DiscoveryMode) -> Self {
        match value {
            DiscoveryMode::VcsAware => DiscoveryStrategy::VcsAware,
            DiscoveryMode::FilesystemWalk => DiscoveryStrategy::FilesystemWalk,
        }
    }
}

/// checkrun CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "checkrun")]
#[command(about = "Dispatch repository files to external checkers and aggregate their verdicts")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute; a bare invocation runs the checker sequence
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output coloring (overrides the config file)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,
}

/// Available checkrun subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the checker sequence (the default subcommand)
    Run {
        /// Root directory to check
        #[arg(default_value = ".")]
        root: String,

        /// File discovery strategy (overrides the config file)
        #[arg(long)]
        discovery: Option<DiscoveryMode>,

        /// Output format (overrides the config file)
        #[arg(short, long)]
        format: Option<OutputFormatArg>,

        /// Run only the named checker (repeatable)
        #[arg(long = "only", value_name = "CHECKER")]
        only: Vec<String>,

        /// Stop after the first failing checker
        #[arg(long)]
        fail_fast: bool,
    },

    /// List the effective checker set
    List {
        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormatArg>,

        /// Root directory whose configuration applies
        #[arg(long, default_value = ".")]
        root: String,
    },

    /// Write a commented default checkrun.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Default for Command {
    /// The bare `checkrun` invocation: run everything in the current tree
    fn default() -> Self {
        Command::Run {
            root: ".".to_string(),
            discovery: None,
            format: None,
            only: Vec::new(),
            fail_fast: false,
        }
    }
}
