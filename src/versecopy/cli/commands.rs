//! # CLI Layer
//!
//! One UI client for versecopy. The library never prints; this module is the
//! only place that knows about stdout, stderr and process exit codes.
//!
//! - `run()`: parses arguments, sets up logging and dispatches
//! - `handle_*()`: per-command handlers that call [`VerseApi`] and print
//!
//! Status messages go to stdout for the human-readable `list` format and to
//! stderr for `table`, `tagged` and `json`, so those can be piped.

use super::print::{render_books, render_messages, render_verses};
use super::setup::{Cli, Commands, CopyArg, OutputFormat};
use super::shell::run_shell;
use clap::Parser;
use serde::Serialize;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;
use versecopy::api::VerseApi;
use versecopy::clipboard::SystemClipboard;
use versecopy::commands::copy::CopyFormat;
use versecopy::commands::{CmdMessage, MessageLevel};
use versecopy::config::{config_dir, VerseConfig, KEYS};
use versecopy::error::{Result, VerseError};
use versecopy::model::Verse;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Lookup {
            reference,
            format,
            copy,
        }) => {
            let config = load_config(cli.api_url)?;
            handle_lookup(&config, reference.join(" "), format, copy)
        }
        Some(Commands::Books) => handle_books(),
        Some(Commands::Config { key, value }) => handle_config(key, value),
        Some(Commands::Shell) | None => {
            let config = load_config(cli.api_url)?;
            handle_shell(&config)
        }
    }
}

/// Logging is silent unless `RUST_LOG` is set or `-v` is passed; the status
/// line already tells the user what happened.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("versecopy=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(api_url: Option<String>) -> Result<VerseConfig> {
    let config = VerseConfig::load(config_dir()?)?
        .with_env()
        .with_api_url(api_url);
    tracing::debug!(
        api_url = %config.api_url,
        timeout = config.timeout_secs,
        "configuration loaded"
    );
    Ok(config)
}

#[derive(Serialize)]
struct LookupOutput<'a> {
    reference: Option<&'a str>,
    verses: &'a [Verse],
}

fn handle_lookup(
    config: &VerseConfig,
    reference: String,
    format: OutputFormat,
    copy: Option<CopyArg>,
) -> Result<()> {
    let mut api = VerseApi::from_config(config, SystemClipboard);
    let result = api.search(&reference);

    if let Some(failure) = result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error)
    {
        return Err(VerseError::Search(failure.content.clone()));
    }

    match format {
        OutputFormat::List => {
            print!(
                "{}",
                render_verses(result.label.as_deref(), &result.listed_verses)
            );
            print!("{}", render_messages(&result.messages));
        }
        OutputFormat::Table | OutputFormat::Tagged => {
            let copy_format = if format == OutputFormat::Table {
                CopyFormat::Table
            } else {
                CopyFormat::Tagged
            };
            println!("{}", api.render(copy_format));
            eprint!("{}", render_messages(&result.messages));
        }
        OutputFormat::Json => {
            let output = LookupOutput {
                reference: result.label.as_deref(),
                verses: &result.listed_verses,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            eprint!("{}", render_messages(&result.messages));
        }
    }

    if let Some(copy) = copy {
        let messages = match api.copy(copy.into()) {
            Ok(copied) => render_messages(&copied.messages),
            Err(e) => {
                tracing::warn!("copy failed: {}", e);
                render_messages(&[CmdMessage::warning(e.to_string())])
            }
        };
        if format == OutputFormat::List {
            print!("{}", messages);
        } else {
            eprint!("{}", messages);
        }
    }
    Ok(())
}

fn handle_books() -> Result<()> {
    print!("{}", render_books());
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let dir = config_dir()?;
    let mut config = VerseConfig::load(&dir)?;

    match (key, value) {
        (None, _) => {
            for key in KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        (Some(key), None) => println!("{}", config.get(&key)?),
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(&dir)?;
            print!(
                "{}",
                render_messages(&[CmdMessage::success(format!(
                    "{} = {}",
                    key,
                    config.get(&key)?
                ))])
            );
        }
    }
    Ok(())
}

fn handle_shell(config: &VerseConfig) -> Result<()> {
    let mut api = VerseApi::from_config(config, SystemClipboard);
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    run_shell(&mut api, stdin.lock(), &mut stdout, interactive)
}
