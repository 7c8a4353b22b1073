//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod launch;
pub mod say;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::auth::AuthManager;
use crate::cli::launch::LaunchSettings;
use crate::cli::say::run_say;
use crate::core::config::data::Config;
use crate::core::config::defaults::ConfigKey;
use crate::core::constants::DEBUG_LOG_ENV;
use crate::ui::chat_loop::{run_chat, ChatOptions};
use crate::utils::logging::{init_tracing, LogTarget};

#[derive(Parser)]
#[command(name = "dsa-sage")]
#[command(about = "A terminal tutor for data structures and algorithms, backed by Gemini")]
#[command(
    long_about = "DSA Sage is a full-screen terminal chat with a tutor that only talks about \
data structures and algorithms. Replies come from Google's Gemini API.\n\n\
Authentication:\n\
  Use 'dsa-sage auth' to store a Gemini API key in your system keyring.\n\n\
Environment Variables:\n\
  GEMINI_API_KEY    Gemini API key (checked before the keyring)\n\
  GEMINI_BASE_URL   Custom API base URL (optional)\n\
  DSA_SAGE_LOG      Write diagnostic logs to this file\n\
  RUST_LOG          Log filter (defaults to dsa_sage=info)\n\n\
Controls:\n\
  Enter             Send the message\n\
  Up/Down/Mouse     Scroll through the conversation\n\
  PgUp/PgDn         Scroll a page at a time\n\
  Home/End          Jump to the top or bottom\n\
  Ctrl+L            Clear the conversation\n\
  Ctrl+U            Clear the input field\n\
  Ctrl+C or Esc     Quit"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Gemini model to use instead of the configured one
    #[arg(short = 'm', long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Write diagnostic logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub debug_log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Ask a single question and print the answer
    Say {
        /// The question to ask
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// Store a Gemini API key in the system keyring
    Auth,
    /// Remove the stored Gemini API key
    Deauth,
    /// Set configuration values, or show them when no value is given
    Set {
        /// Configuration key to set (model, base-url, system-instruction)
        key: Option<String>,
        /// Value to set for the key (can be multiple words)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Option<Vec<String>>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Auth => {
            if let Err(e) = AuthManager::new().interactive_auth() {
                eprintln!("❌ Authentication failed: {e}");
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Deauth => {
            if let Err(e) = AuthManager::new().interactive_deauth() {
                eprintln!("❌ Deauthentication failed: {e}");
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Set { key, value } => handle_set(key, value),
        Commands::Unset { key } => handle_unset(&key),
        Commands::Say { prompt } => {
            install_logging(LogTarget::for_one_shot(
                args.debug_log.as_deref(),
                std::env::var(DEBUG_LOG_ENV).ok().as_deref(),
            ));
            let settings = LaunchSettings::from_environment(&Config::load()?, args.model.as_deref());
            let client = settings.client(&require_api_key());
            run_say(prompt, settings, client.as_ref()).await
        }
        Commands::Chat => {
            install_logging(LogTarget::for_interactive(
                args.debug_log.as_deref(),
                std::env::var(DEBUG_LOG_ENV).ok().as_deref(),
            ));
            let settings = LaunchSettings::from_environment(&Config::load()?, args.model.as_deref());
            let client = settings.client(&require_api_key());
            run_chat(ChatOptions {
                client,
                model: settings.model,
                system_instruction: settings.system_instruction,
            })
            .await
        }
    }
}

fn install_logging(target: LogTarget) {
    if let Err(err) = init_tracing(&target) {
        eprintln!("⚠️  Logging disabled: {err}");
    }
}

fn require_api_key() -> String {
    match AuthManager::new().resolve() {
        Ok(credential) => {
            tracing::debug!(source = %credential.source, "using Gemini API key");
            credential.api_key
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}

fn handle_set(key: Option<String>, value: Option<Vec<String>>) -> Result<(), Box<dyn Error>> {
    let mut config = Config::load()?;
    let value = value.map(|parts| parts.join(" ")).unwrap_or_default();

    let Some(key) = key else {
        config.print_all();
        return Ok(());
    };
    let key = parse_key(&key);

    if value.trim().is_empty() {
        config.print_all();
        return Ok(());
    }

    if let Err(message) = config.set(key, &value) {
        eprintln!("❌ {message}");
        std::process::exit(1);
    }
    config.save()?;
    println!("✅ Set {key} to: {}", value.trim());
    Ok(())
}

fn handle_unset(key: &str) -> Result<(), Box<dyn Error>> {
    let key = parse_key(key);
    let mut config = Config::load()?;
    if config.get(key).is_none() {
        warn!(%key, "unset requested for a key that is not set");
    }
    config.unset(key);
    config.save()?;
    println!("✅ Unset {key}");
    Ok(())
}

fn parse_key(key: &str) -> ConfigKey {
    match key.parse::<ConfigKey>() {
        Ok(key) => key,
        Err(message) => {
            eprintln!("❌ {message}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests;
