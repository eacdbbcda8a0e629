//! # stdtour-core
//!
//! Core library for the `stdtour` command-line tool.
//!
//! Nine small, stateless operations over everyday system facilities, each
//! returning a typed `Result` so callers can tell a genuine zero result from
//! a failure.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stdtour_core::prelude::*;
//!
//! fn main() -> stdtour_core::Result<()> {
//!     let numbers = find_numbers("There are 15 cats, 7 dogs, and 42 birds.");
//!     assert_eq!(numbers, vec!["15", "7", "42"]);
//!
//!     let stats = calculate_statistics(&[10.0, 20.0, 30.0, 40.0, 50.0])?;
//!     assert_eq!(stats.variance, 250.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │           API Layer                 │  HTTP byte fetcher
//! ├─────────────────────────────────────┤
//! │          Core Layer                 │  The nine operations
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  TOML configuration
//! ├─────────────────────────────────────┤
//! │         Utils Layer                 │  Logging, validation, helpers
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`]: reqwest-backed byte fetcher
//! - [`core`]: filesystem, process, text, statistics, fetch, clock, gzip, timing
//! - [`storage`]: configuration loading
//! - [`utils`]: logging, validation, byte formatting, error reporting
//! - [`display`]: table rendering
//! - [`error`]: hierarchical error system with troubleshooting hints

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use stdtour_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::AppError;

    pub use crate::api::client::HttpFetcher;

    pub use crate::core::clock::get_current_datetime;
    pub use crate::core::compress::{compress_data, decompress_data};
    pub use crate::core::fetch::{ByteSource, fetch_url_data};
    pub use crate::core::process::InvocationArgs;
    pub use crate::core::stats::{Statistics, calculate_statistics};
    pub use crate::core::text::find_numbers;
    pub use crate::core::timing::{Snippet, measure_execution_time};
    pub use crate::core::workspace::{get_current_directory, list_python_files, list_source_files};

    pub use crate::storage::config::Config;
}

/// The nine operations.
///
/// Each submodule owns one external capability and its error type:
/// - [`core::workspace`]: working directory and directory listing
/// - [`core::process`]: invocation arguments
/// - [`core::text`]: digit-run extraction
/// - [`core::stats`]: mean, median, sample variance
/// - [`core::fetch`]: bounded byte fetch
/// - [`core::clock`]: timestamp formatting
/// - [`core::compress`]: gzip
/// - [`core::timing`]: repeated execution timing
pub mod core;

/// Storage layer - configuration loading.
pub mod storage;

/// Utilities layer - shared helpers and common functionality.
pub mod utils;

/// API layer - HTTP client used by [`core::fetch`].
pub mod api;

/// Display layer - table rendering for terminal output.
pub mod display;

/// Error handling - hierarchical error system.
///
/// - Area-specific error enums (filesystem, stats, network, ...)
/// - Severity levels (High, Medium, Low)
/// - Troubleshooting hints for common issues
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
