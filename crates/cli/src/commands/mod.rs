//! Command implementations.

pub mod dashboard;
pub mod session;

use std::io::{self, IsTerminal, Write};

use container_portal_client::{
    ApiGateway, ConfigError, FileSessionStore, GatewayError, Locale, LoginError, Portal,
    PortalConfig, SessionError,
};
use container_portal_core::Theme;
use thiserror::Error;

use crate::messages::Message;
use crate::render::Style;

/// The portal as wired for the command line.
pub type CliPortal = Portal<ApiGateway, FileSessionStore>;

/// Errors that end a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client could not be created.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Session file could not be read or written.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Login attempt failed.
    #[error("Login failed: {0}")]
    Login(#[from] LoginError),

    /// No container with this number in the customer's records.
    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Message shown to the user for this error.
    #[must_use]
    pub const fn message(&self) -> Message {
        match self {
            Self::Config(_) => Message::ConfigError,
            Self::Gateway(_) => Message::ConnectionError,
            Self::Io(_) => Message::OutputError,
            Self::Session(_) => Message::SessionError,
            Self::ContainerNotFound(_) => Message::ContainerNotFound,
            Self::Login(err) => match err {
                LoginError::EmptyPhone => Message::EmptyPhone,
                LoginError::NotFound => Message::NotFound,
                LoginError::InProgress | LoginError::Connection(_) => Message::ConnectionError,
            },
        }
    }
}

/// Build the portal from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn open_portal(config: &PortalConfig) -> Result<CliPortal, CliError> {
    let gateway = ApiGateway::new(config)?;
    let store = FileSessionStore::new(&config.session_file);
    Ok(Portal::new(gateway, store))
}

/// Rendering style from configuration and the persisted theme.
#[must_use]
pub fn style(config: &PortalConfig, theme: Theme) -> Style {
    Style {
        locale: config.locale,
        theme,
        color: io::stdout().is_terminal(),
    }
}

/// Write a status line to stderr, keeping stdout for rendered output.
///
/// # Errors
///
/// Returns an error if writing to stderr fails.
pub fn status(locale: Locale, message: Message) -> io::Result<()> {
    writeln!(io::stderr().lock(), "{}", message.text(locale))
}
