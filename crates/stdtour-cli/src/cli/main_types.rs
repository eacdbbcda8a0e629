use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stdtour")]
#[command(about = "A tour of everyday filesystem, text, network and codec operations")]
#[command(version)]
#[command(after_help = "Examples:
  stdtour demo                          # Run every operation once
  stdtour ls src --suffix .rs           # List Rust files in src/
  stdtour numbers \"15 cats, 7 dogs\"     # Extract digit runs
  stdtour stats 10 20 30 40 50          # Mean, median, sample variance
  stdtour fetch https://www.example.com --bytes 64
  stdtour compress --file notes.txt --verify
  stdtour time squares -r 1000          # Time a built-in snippet

Environment Variables:
  STDTOUR_CONFIG_DIR   Directory containing config.toml
  NO_COLOR             Disable colored table headers")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true, env = "STDTOUR_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every operation once and print labeled results
    Demo,
    /// Print the current working directory
    Cwd,
    /// List files with a given suffix (default from config, usually .py)
    Ls {
        /// Directory to list (defaults to the current directory)
        directory: Option<PathBuf>,
        /// File-name suffix to match
        #[arg(long)]
        suffix: Option<String>,
        /// Output format: plain, table, or json
        #[arg(short, long, default_value = "plain")]
        format: String,
    },
    /// Print the invocation arguments, program name first
    Args {
        /// Extra arguments, echoed back as given
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        rest: Vec<String>,
    },
    /// Extract every run of digits from text
    Numbers {
        /// Text to scan
        #[arg(conflicts_with = "file")]
        text: Option<String>,
        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Mean, median and sample variance of numbers
    Stats {
        /// Values to summarize
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
        /// Output format: table, json, or plain
        #[arg(short, long, default_value = "table")]
        format: String,
    },
    /// Fetch the first bytes of a URL
    Fetch {
        /// URL to read (defaults to fetch.url from config)
        url: Option<String>,
        /// Maximum number of bytes to read
        #[arg(short, long)]
        bytes: Option<usize>,
        /// Write the bytes unmodified to stdout
        #[arg(long)]
        raw: bool,
    },
    /// Print the current local date and time
    Now,
    /// Gzip-compress text or a file and report sizes
    Compress {
        /// Text to compress
        #[arg(conflicts_with = "file")]
        text: Option<String>,
        /// Compress the contents of a file instead
        #[arg(long)]
        file: Option<PathBuf>,
        /// Decompress the result and check it matches the input
        #[arg(long)]
        verify: bool,
    },
    /// Time repeated runs of a built-in snippet
    Time {
        /// Snippet name: squares, add, sum, sort
        snippet: Option<String>,
        /// Number of executions
        #[arg(short, long)]
        repetitions: Option<u64>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Commands {
    /// True when stdout carries payload bytes and diagnostics must stay off it
    pub fn writes_raw_output(&self) -> bool {
        matches!(self, Commands::Fetch { raw: true, .. })
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the path of the configuration file in use
    Path,
}
