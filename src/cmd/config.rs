use std::io::{self, Write};

use clap::{Args, Subcommand};

use crate::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, StoredConfig, config_file_path};
use crate::error::{AppError, AppResult};

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Run the interactive configuration wizard.
    Init,
    /// Show the stored configuration.
    Show,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Init => run_init(),
        ConfigCommand::Show => run_show(),
    }
}

fn run_init() -> AppResult<()> {
    let mut cfg = StoredConfig::load()?;

    println!("Configuring ticketlens.");
    println!("Press Enter to keep the current value, '-' to clear it.");
    println!();

    match prompt(
        &format!("API base URL (default {DEFAULT_API_URL})"),
        cfg.api_base_url.as_deref(),
    )? {
        PromptAction::Keep => {}
        PromptAction::Clear => cfg.api_base_url = None,
        PromptAction::Set(value) => cfg.api_base_url = Some(value),
    }

    let current_timeout = cfg.request_timeout_secs.map(|secs| secs.to_string());
    match prompt(
        &format!("Request timeout in seconds (default {DEFAULT_TIMEOUT_SECS})"),
        current_timeout.as_deref(),
    )? {
        PromptAction::Keep => {}
        PromptAction::Clear => cfg.request_timeout_secs = None,
        PromptAction::Set(value) => {
            let secs = value.parse::<u64>().ok().filter(|secs| *secs > 0).ok_or_else(|| {
                AppError::Configuration(format!("timeout must be a positive whole number, got '{value}'"))
            })?;
            cfg.request_timeout_secs = Some(secs);
        }
    }

    cfg.save()?;

    let path = config_file_path()?;
    println!("\nConfiguration saved to {}", path.display());
    Ok(())
}

fn run_show() -> AppResult<()> {
    let cfg = StoredConfig::load()?;
    let path = config_file_path()?;

    println!("Configuration file: {}", path.display());
    println!("API base URL: {}", display_value(cfg.api_base_url.as_deref()));
    println!(
        "Request timeout: {}",
        cfg.request_timeout_secs
            .map(|secs| format!("{secs}s"))
            .unwrap_or_else(|| "<not set>".to_string())
    );

    Ok(())
}

fn prompt(field: &str, current: Option<&str>) -> AppResult<PromptAction> {
    let mut stdout = io::stdout();

    match current {
        Some(value) => write!(stdout, "{field} [{value}] (Enter to keep, '-' to clear): ")?,
        None => write!(stdout, "{field} (Enter to skip): ")?,
    }
    stdout.flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(PromptAction::from_input(&input))
}

fn display_value(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

#[derive(Debug, PartialEq, Eq)]
enum PromptAction {
    Keep,
    Clear,
    Set(String),
}

impl PromptAction {
    fn from_input(input: &str) -> Self {
        match input.trim() {
            "" => PromptAction::Keep,
            "-" => PromptAction::Clear,
            value => PromptAction::Set(value.to_string()),
        }
    }
}
