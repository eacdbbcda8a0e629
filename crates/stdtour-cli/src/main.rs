use clap::Parser;
use stdtour_core::core::process::InvocationArgs;
use stdtour_core::storage::config::Config;
use tracing_subscriber::filter::LevelFilter;

mod cli;

use cli::dispatcher::Dispatcher;
use cli::main_types::Cli;

fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| e.to_string())?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Captured once here and passed down explicitly
    let invocation = InvocationArgs::from_env();
    let cli = Cli::parse_from(invocation.args());

    init_logging(cli.verbose)?;

    let config = match Config::load_from_dir(cli.config_dir.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    let raw_output = cli.command.writes_raw_output();
    if cli.verbose {
        let mut banner = vec!["Verbose mode is enabled".to_string()];
        if let Some(config_dir) = &cli.config_dir {
            banner.push(format!("Using config directory: {}", config_dir.display()));
        }
        for line in banner {
            if raw_output {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
        }
    }

    let dispatcher = Dispatcher::new(config, cli.config_dir, cli.verbose, invocation)
        .with_raw_output(raw_output);

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        log::debug!("Failure severity: {}", e.severity().label());
        std::process::exit(1);
    }

    Ok(())
}
