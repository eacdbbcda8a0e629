use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("FsError: {0}")]
    Fs(#[from] FsError),
    #[error("TextError: {0}")]
    Text(#[from] TextError),
    #[error("StatsError: {0}")]
    Stats(#[from] StatsError),
    #[error("NetError: {0}")]
    Net(#[from] NetError),
    #[error("CompressError: {0}")]
    Compress(#[from] CompressError),
    #[error("TimingError: {0}")]
    Timing(#[from] TimingError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Failed to write output: {0}")]
    OutputWrite(std::io::Error),
    #[error("Failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    DirNotFound,
    #[error("Configuration I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    Parse { message: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum FsError {
    #[error("Failed to get current directory: {0}")]
    CurrentDir(std::io::Error),
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },
    #[error("Directory {path} is not readable: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum TextError {
    #[error("Input must be text: invalid UTF-8 at byte {valid_up_to}")]
    NotText { valid_up_to: usize },
}

#[derive(Error, Debug, PartialEq)]
pub enum StatsError {
    #[error("Input list is empty")]
    Empty,
    #[error("Need at least {required} data points, got {actual}")]
    InsufficientData { required: usize, actual: usize },
    #[error("Value at index {index} is not a finite number")]
    NonFinite { index: usize },
    #[error("Value '{value}' is not numeric")]
    NotNumeric { value: String },
    #[error("Result does not fit in a 64-bit float")]
    Overflow,
}

#[derive(Error, Debug)]
pub enum NetError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("HTTP error: {status} from {url}")]
    Status { status: u16, url: String },
}

#[derive(Error, Debug)]
pub enum CompressError {
    #[error("Gzip encoding failed: {0}")]
    Encode(std::io::Error),
    #[error("Gzip decoding failed: {0}")]
    Decode(std::io::Error),
}

#[derive(Error, Debug)]
pub enum TimingError {
    #[error("Unknown snippet '{name}'")]
    UnknownSnippet { name: String },
    #[error("Snippet failed on iteration {iteration}: {message}")]
    SnippetFailed { iteration: u64, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::High => "high",
            ErrorSeverity::Medium => "medium",
            ErrorSeverity::Low => "low",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Fs(fs_error) => match fs_error {
                FsError::CurrentDir(_) => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Net(net_error) => match net_error {
                NetError::Status { status, .. } if *status >= 500 => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Compress(_) => ErrorSeverity::High,
            AppError::Text(_) | AppError::Stats(_) | AppError::Timing(_) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Config(ConfigError::Parse { .. }) => Some(
                "Check config.toml syntax, or run 'stdtour config show' to see effective values"
                    .to_string(),
            ),
            AppError::Fs(FsError::DirectoryNotFound { .. }) => {
                Some("Pass an existing directory, e.g. 'stdtour ls .'".to_string())
            }
            AppError::Net(NetError::InvalidUrl { .. }) => {
                Some("URLs must start with http:// or https://".to_string())
            }
            AppError::Net(NetError::Request { .. }) => {
                Some("Check your network connection and try again".to_string())
            }
            AppError::Stats(StatsError::InsufficientData { .. }) => {
                Some("Sample variance needs at least two values".to_string())
            }
            AppError::Stats(StatsError::Overflow) => {
                Some("Values are too far apart; try rescaling the input".to_string())
            }
            AppError::Timing(TimingError::UnknownSnippet { .. }) => Some(format!(
                "Available snippets: {}",
                crate::core::timing::Snippet::names().join(", ")
            )),
            _ => None,
        }
    }
}
