//! Container Portal CLI - view your rented containers from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Log in with a phone number and show the dashboard
//! portal login 0501234567
//!
//! # Show the dashboard with the remembered phone number
//! portal dashboard
//!
//! # Show the details of one container
//! portal show C-17
//!
//! # Show or toggle the theme
//! portal theme
//! portal theme toggle
//!
//! # Forget the remembered phone number
//! portal logout
//! ```
//!
//! # Commands
//!
//! - `login` - Log in and show the dashboard
//! - `dashboard` - Show the dashboard for the remembered phone number
//! - `show` - Show one container
//! - `theme` - Show or toggle the display theme
//! - `logout` - Forget the remembered phone number

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use container_portal_client::{Locale, PortalConfig};

mod commands;
mod messages;
mod render;

use commands::CliError;

#[derive(Parser)]
#[command(name = "portal")]
#[command(author, version, about = "Container rental portal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with a phone number and show the dashboard
    Login {
        /// Customer phone number (defaults to the remembered one)
        phone: Option<String>,
    },
    /// Show the dashboard for the remembered phone number
    Dashboard,
    /// Show the details of one container
    Show {
        /// Container number
        container_id: String,
    },
    /// Show or toggle the display theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Forget the remembered phone number
    Logout,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
}

#[tokio::main]
async fn main() {
    // Initialize tracing on stderr so it never mixes with rendered output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "container_portal=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match PortalConfig::from_env() {
        Ok(config) => config,
        Err(e) => exit_with(Locale::default(), &CliError::from(e)),
    };

    if let Err(e) = run(cli, &config).await {
        exit_with(config.locale, &e);
    }
}

async fn run(cli: Cli, config: &PortalConfig) -> Result<(), CliError> {
    match cli.command {
        Commands::Login { phone } => commands::dashboard::login(config, phone.as_deref()).await?,
        Commands::Dashboard => commands::dashboard::login(config, None).await?,
        Commands::Show { container_id } => {
            commands::dashboard::show(config, &container_id).await?;
        }
        Commands::Theme { action } => match action.unwrap_or(ThemeAction::Show) {
            ThemeAction::Show => commands::session::show_theme(config)?,
            ThemeAction::Toggle => commands::session::toggle_theme(config)?,
        },
        Commands::Logout => commands::session::logout(config)?,
    }
    Ok(())
}

/// Report a failed command to the user and exit.
fn exit_with(locale: Locale, error: &CliError) -> ! {
    tracing::debug!("Command failed: {error}");
    let _ = writeln!(io::stderr().lock(), "{}", error.message().text(locale));
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_login_phone_is_optional() {
        let cli = Cli::try_parse_from(["portal", "login"]).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(cli.command, Commands::Login { phone: None }));

        let cli = Cli::try_parse_from(["portal", "login", "0501234567"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(cli.command, Commands::Login { phone: Some(ref p) } if p == "0501234567"));
    }

    #[test]
    fn test_theme_defaults_to_show() {
        let cli = Cli::try_parse_from(["portal", "theme"]).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(cli.command, Commands::Theme { action: None }));

        let cli =
            Cli::try_parse_from(["portal", "theme", "toggle"]).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(
            cli.command,
            Commands::Theme {
                action: Some(ThemeAction::Toggle)
            }
        ));
    }

    #[test]
    fn test_show_requires_container() {
        assert!(Cli::try_parse_from(["portal", "show"]).is_err());
    }
}
