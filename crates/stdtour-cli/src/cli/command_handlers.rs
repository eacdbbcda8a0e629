use crate::cli::main_types::ConfigCommands;
use std::io::Write;
use std::path::{Path, PathBuf};
use stdtour_core::core::compress::{compress_data, compression_ratio, decompress_data};
use stdtour_core::core::fetch::{ByteSource, fetch_url_data};
use stdtour_core::core::process::InvocationArgs;
use stdtour_core::core::stats::{Statistics, calculate_statistics, parse_values};
use stdtour_core::core::text::{find_numbers, find_numbers_in_bytes};
use stdtour_core::core::timing::Snippet;
use stdtour_core::core::{clock, workspace};
use stdtour_core::display::TableDisplay;
use stdtour_core::error::{AppError, CliError, CompressError};
use stdtour_core::storage::config::{CONFIG_FILE_NAME, Config};
use stdtour_core::utils::data::{format_bytes, preview_bytes};
use stdtour_core::utils::error_helpers::{report_or, report_or_default};
use stdtour_core::utils::logging::print_verbose;

fn read_input_file(path: &Path) -> Result<Vec<u8>, AppError> {
    std::fs::read(path).map_err(|source| {
        CliError::InputFile {
            path: path.to_string_lossy().to_string(),
            source,
        }
        .into()
    })
}

fn write_raw<W: Write>(out: &mut W, data: &[u8]) -> Result<(), CliError> {
    out.write_all(data)
        .and_then(|_| out.flush())
        .map_err(CliError::OutputWrite)
}

fn unknown_format(format: &str, allowed: &str) -> AppError {
    AppError::Cli(CliError::InvalidArguments(format!(
        "Unknown format '{}'. Use {}",
        format, allowed
    )))
}

/// Runs every operation once, reporting failures and carrying on
#[derive(Default)]
pub struct DemoHandler;

impl DemoHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle<S: ByteSource>(
        &self,
        config: &Config,
        invocation: &InvocationArgs,
        source: &S,
        verbose: bool,
    ) -> Result<(), AppError> {
        let demo = &config.demo;
        println!("\n===== STDTOUR DEMO =====\n");

        println!("1. Current Directory:");
        let current_dir = report_or_default(
            workspace::get_current_directory(),
            "getting current directory",
        );
        println!("   {}\n", current_dir);

        println!(
            "2. Files ending in '{}' in Current Directory:",
            config.listing.suffix
        );
        let files = report_or_default(
            workspace::list_source_files(&current_dir, &config.listing.suffix),
            "listing source files",
        );
        for file in &files {
            println!("   - {}", file);
        }
        println!();

        println!("3. Command Line Arguments:");
        for (i, arg) in invocation.args().iter().enumerate() {
            println!("   Arg {}: {}", i, arg);
        }
        println!();

        println!("4. Finding Numbers in Text:");
        let numbers = find_numbers(&demo.sample_text);
        println!("   Text: '{}'", demo.sample_text);
        println!("   Numbers found: {:?}\n", numbers);

        println!("5. Calculating Statistics:");
        let stats = report_or(
            calculate_statistics(&demo.sample_data),
            "calculating statistics",
            Statistics::ZERO,
        );
        println!("   Data: {:?}", demo.sample_data);
        println!("   Mean: {}", stats.mean);
        println!("   Median: {}", stats.median);
        println!("   Variance: {}\n", stats.variance);

        println!("6. Fetching URL Data:");
        let url = &config.fetch.url;
        let byte_count = config.fetch.byte_count;
        print_verbose(verbose, &format!("Fetching {} bytes from {}", byte_count, url));
        let data = report_or_default(
            fetch_url_data(source, url, byte_count).await,
            "fetching URL data",
        );
        println!("   First {} bytes from {}:", byte_count, url);
        println!("   {}\n", preview_bytes(&data));

        println!("7. Current Date and Time:");
        println!("   {}\n", clock::get_current_datetime());

        println!("8. Compressing Data:");
        let original = demo.compress_text.repeat(demo.compress_repeat).into_bytes();
        let compressed = report_or_default(compress_data(&original), "compressing data");
        println!("   Original size: {} bytes", original.len());
        println!("   Compressed size: {} bytes", compressed.len());
        println!(
            "   Compression ratio: {:.2}\n",
            compression_ratio(original.len(), compressed.len())
        );

        println!("9. Measuring Execution Time:");
        let repetitions = demo.repetitions;
        let timed = Snippet::from_name(&demo.snippet).map(|snippet| {
            let elapsed = report_or(snippet.time(repetitions), "measuring execution time", 0.0);
            (snippet.code(), elapsed)
        });
        let (code, elapsed) = report_or(timed, "measuring execution time", ("", 0.0));
        println!("   Code: '{}'", code);
        println!("   Executions: {}", repetitions);
        println!("   Total time: {:.6} seconds", elapsed);
        println!(
            "   Average time per execution: {:.9} seconds\n",
            elapsed / repetitions as f64
        );

        Ok(())
    }
}

/// One operation per command; failures propagate to the caller
#[derive(Default)]
pub struct ToolHandler;

impl ToolHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_cwd(&self) -> Result<(), AppError> {
        println!("{}", workspace::get_current_directory()?);
        Ok(())
    }

    pub fn handle_ls(
        &self,
        directory: Option<PathBuf>,
        suffix: &str,
        format: &str,
        verbose: bool,
    ) -> Result<(), AppError> {
        let directory = match directory {
            Some(dir) => dir,
            None => PathBuf::from(workspace::get_current_directory()?),
        };
        print_verbose(
            verbose,
            &format!("Listing '{}' files in {}", suffix, directory.display()),
        );

        let mut files = workspace::list_source_files(&directory, suffix)?;
        files.sort();

        match format {
            "plain" => {
                for file in &files {
                    println!("{}", file);
                }
            }
            "table" => println!("{}", TableDisplay::new().render_file_list(&files)),
            "json" => println!("{}", serde_json::json!(files)),
            other => return Err(unknown_format(other, "plain, table, or json")),
        }
        Ok(())
    }

    pub fn handle_args(&self, invocation: &InvocationArgs) -> Result<(), AppError> {
        for (i, arg) in invocation.args().iter().enumerate() {
            println!("Arg {}: {}", i, arg);
        }
        Ok(())
    }

    pub fn handle_numbers(
        &self,
        text: Option<String>,
        file: Option<PathBuf>,
    ) -> Result<(), AppError> {
        let numbers = match (text, file) {
            (Some(text), _) => find_numbers(&text),
            (None, Some(path)) => find_numbers_in_bytes(&read_input_file(&path)?)?,
            (None, None) => {
                return Err(CliError::InvalidArguments(
                    "Provide text to scan or --file <path>".to_string(),
                )
                .into());
            }
        };

        for number in &numbers {
            println!("{}", number);
        }
        Ok(())
    }

    pub fn handle_stats(&self, values: &[String], format: &str) -> Result<(), AppError> {
        let data = parse_values(values)?;
        let stats = calculate_statistics(&data)?;

        match format {
            "table" => println!("{}", TableDisplay::new().render_statistics(&stats)),
            "json" => {
                let json = serde_json::to_string_pretty(&stats).map_err(|e| {
                    CliError::InvalidArguments(format!("Failed to serialize statistics: {}", e))
                })?;
                println!("{}", json);
            }
            "plain" => {
                println!("Mean: {}", stats.mean);
                println!("Median: {}", stats.median);
                println!("Variance: {}", stats.variance);
            }
            other => return Err(unknown_format(other, "table, json, or plain")),
        }
        Ok(())
    }

    pub async fn handle_fetch<S: ByteSource>(
        &self,
        source: &S,
        url: &str,
        byte_count: usize,
        raw: bool,
    ) -> Result<(), AppError> {
        let data = fetch_url_data(source, url, byte_count).await?;

        if raw {
            write_raw(&mut std::io::stdout().lock(), &data)?;
        } else {
            println!("Fetched {} from {}", format_bytes(data.len()), url);
            println!("{}", preview_bytes(&data));
        }
        Ok(())
    }

    pub fn handle_now(&self) -> Result<(), AppError> {
        println!("{}", clock::get_current_datetime());
        Ok(())
    }

    pub fn handle_compress(
        &self,
        text: Option<String>,
        file: Option<PathBuf>,
        verify: bool,
    ) -> Result<(), AppError> {
        let original = match (text, file) {
            (Some(text), _) => text.into_bytes(),
            (None, Some(path)) => read_input_file(&path)?,
            (None, None) => {
                return Err(CliError::InvalidArguments(
                    "Provide text to compress or --file <path>".to_string(),
                )
                .into());
            }
        };

        let compressed = compress_data(&original)?;
        println!("Original size: {} bytes", original.len());
        println!("Compressed size: {} bytes", compressed.len());
        println!(
            "Compression ratio: {:.2}",
            compression_ratio(original.len(), compressed.len())
        );

        if verify {
            let restored = decompress_data(&compressed)?;
            if restored != original {
                return Err(CompressError::Decode(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "decompressed data does not match the input",
                ))
                .into());
            }
            println!("Round-trip: ok");
        }
        Ok(())
    }

    pub fn handle_time(&self, snippet: &str, repetitions: u64) -> Result<(), AppError> {
        let snippet = Snippet::from_name(snippet)?;
        let elapsed = snippet.time(repetitions)?;

        println!("Code: '{}'", snippet.code());
        println!("Executions: {}", repetitions);
        println!("Total time: {:.6} seconds", elapsed);
        if repetitions > 0 {
            println!(
                "Average time per execution: {:.9} seconds",
                elapsed / repetitions as f64
            );
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config: &Config,
        config_dir: Option<&Path>,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                println!("Current Configuration:");
                println!("=====================");
                println!("{}", config.to_toml()?);
                Ok(())
            }
            ConfigCommands::Path => {
                let path = match config_dir {
                    Some(dir) => dir.join(CONFIG_FILE_NAME),
                    None => Config::config_file_path()?,
                };
                let state = if path.exists() { "" } else { " (not present, using defaults)" };
                println!("{}{}", path.display(), state);
                Ok(())
            }
        }
    }
}
