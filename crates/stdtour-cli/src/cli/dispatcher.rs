use crate::cli::command_handlers::{ConfigHandler, DemoHandler, ToolHandler};
use crate::cli::main_types::Commands;
use std::path::PathBuf;
use stdtour_core::api::client::HttpFetcher;
use stdtour_core::core::process::InvocationArgs;
use stdtour_core::error::AppError;
use stdtour_core::storage::config::Config;
use stdtour_core::utils::logging::{eprint_verbose, print_verbose};

pub struct Dispatcher {
    config: Config,
    config_dir: Option<PathBuf>,
    verbose: bool,
    raw_output: bool,
    invocation: InvocationArgs,
}

impl Dispatcher {
    fn log_verbose(&self, msg: &str) {
        if self.raw_output {
            eprint_verbose(self.verbose, msg);
        } else {
            print_verbose(self.verbose, msg);
        }
    }

    pub fn new(
        config: Config,
        config_dir: Option<PathBuf>,
        verbose: bool,
        invocation: InvocationArgs,
    ) -> Self {
        Self {
            config,
            config_dir,
            verbose,
            raw_output: false,
            invocation,
        }
    }

    /// Keep verbose diagnostics off stdout, which carries payload bytes
    pub fn with_raw_output(mut self, raw_output: bool) -> Self {
        self.raw_output = raw_output;
        self
    }

    // Helper method to create the HTTP fetcher with the configured timeout
    fn create_fetcher(&self) -> Result<HttpFetcher, AppError> {
        match self.config.fetch.timeout() {
            Some(timeout) => {
                self.log_verbose(&format!("Creating fetcher with {:?} timeout", timeout));
                Ok(HttpFetcher::with_timeout(timeout)?)
            }
            None => {
                self.log_verbose("Creating fetcher with transport default timeout");
                Ok(HttpFetcher::new()?)
            }
        }
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        self.log_verbose(&format!("Dispatching {:?}", command));
        let tools = ToolHandler::new();

        match command {
            Commands::Demo => {
                let fetcher = self.create_fetcher()?;
                DemoHandler::new()
                    .handle(&self.config, &self.invocation, &fetcher, self.verbose)
                    .await
            }
            Commands::Cwd => tools.handle_cwd(),
            Commands::Ls {
                directory,
                suffix,
                format,
            } => {
                let suffix = suffix.as_deref().unwrap_or(&self.config.listing.suffix);
                tools.handle_ls(directory, suffix, &format, self.verbose)
            }
            Commands::Args { .. } => tools.handle_args(&self.invocation),
            Commands::Numbers { text, file } => tools.handle_numbers(text, file),
            Commands::Stats { values, format } => tools.handle_stats(&values, &format),
            Commands::Fetch { url, bytes, raw } => {
                let fetcher = self.create_fetcher()?;
                let url = url.as_deref().unwrap_or(&self.config.fetch.url);
                let byte_count = bytes.unwrap_or(self.config.fetch.byte_count);
                tools.handle_fetch(&fetcher, url, byte_count, raw).await
            }
            Commands::Now => tools.handle_now(),
            Commands::Compress { text, file, verify } => {
                tools.handle_compress(text, file, verify)
            }
            Commands::Time {
                snippet,
                repetitions,
            } => {
                let snippet = snippet.as_deref().unwrap_or(&self.config.demo.snippet);
                let repetitions = repetitions.unwrap_or(self.config.demo.repetitions);
                tools.handle_time(snippet, repetitions)
            }
            Commands::Config { command } => {
                ConfigHandler::new().handle(command, &self.config, self.config_dir.as_deref())
            }
        }
    }
}
