//! Container Portal Client - everything that talks to the outside world.
//!
//! # Modules
//!
//! - [`config`] - Configuration from environment variables
//! - [`gateway`] - Rental spreadsheet API client
//! - [`session`] - Persisted phone number and theme
//! - [`portal`] - Application state and the login flow

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod gateway;
pub mod portal;
pub mod session;

pub use config::{ConfigError, Locale, PortalConfig};
pub use gateway::{ApiGateway, GatewayError, Lookup, RecordSource};
pub use portal::{AppState, LoginError, LoginPhase, Portal};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionError, SessionStore};
