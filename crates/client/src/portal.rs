//! Application state and the login flow.
//!
//! # Login state machine
//!
//! ```text
//! Idle ──submit──▶ Submitting ──found──────▶ Rendered
//!                      │
//!                      └──not found / error──▶ Idle
//! ```
//!
//! While a submission is in flight the login control is disabled: a second
//! submission is rejected with [`LoginError::InProgress`]. The login flow is
//! the only writer of [`AppState`].

use container_portal_core::{Phone, PhoneError, RecordSet, Theme};
use thiserror::Error;

use crate::gateway::{GatewayError, Lookup, RecordSource};
use crate::session::{Session, SessionError, SessionStore};

/// Errors that end a login attempt.
///
/// None of these are retried; the user has to submit again.
#[derive(Debug, Error)]
pub enum LoginError {
    /// No phone number was entered. No request is made.
    #[error("phone number is required")]
    EmptyPhone,

    /// A submission is already in flight.
    #[error("a login is already in progress")]
    InProgress,

    /// Nothing is registered to the phone number.
    #[error("no containers registered to this phone number")]
    NotFound,

    /// The rental API could not be reached or answered with an error.
    #[error("could not reach the rental service: {0}")]
    Connection(#[source] GatewayError),
}

impl From<PhoneError> for LoginError {
    fn from(e: PhoneError) -> Self {
        match e {
            PhoneError::Empty => Self::EmptyPhone,
        }
    }
}

/// Phase of the login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    /// Waiting for input. The login control is enabled.
    #[default]
    Idle,
    /// A lookup is in flight. The login control is disabled.
    Submitting,
    /// A record set was loaded and the dashboard can be shown.
    Rendered,
}

/// State owned by the running client.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    phase: LoginPhase,
    phone: Option<Phone>,
    records: Option<RecordSet>,
}

impl AppState {
    #[must_use]
    pub const fn phase(&self) -> LoginPhase {
        self.phase
    }

    /// Returns `true` if a new submission would be accepted.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.phase != LoginPhase::Submitting
    }

    /// Phone number of the logged-in customer.
    #[must_use]
    pub const fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    /// Record set of the logged-in customer.
    #[must_use]
    pub const fn records(&self) -> Option<&RecordSet> {
        self.records.as_ref()
    }
}

/// The portal client: a record source, a session store and the state they feed.
#[derive(Debug)]
pub struct Portal<G, S> {
    source: G,
    store: S,
    state: AppState,
}

impl<G, S> Portal<G, S>
where
    G: RecordSource,
    S: SessionStore,
{
    #[must_use]
    pub fn new(source: G, store: S) -> Self {
        Self {
            source,
            store,
            state: AppState::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Read the persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub fn session(&self) -> Result<Session, SessionError> {
        self.store.load()
    }

    /// Submit a phone number.
    ///
    /// On success the record set replaces any previous one, the phase moves
    /// to [`LoginPhase::Rendered`] and the phone number is remembered for the
    /// next run. On failure the phase returns to [`LoginPhase::Idle`] and the
    /// current record set is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::EmptyPhone` without making a request if `input`
    /// is blank.
    /// Returns `LoginError::InProgress` if a submission is already in flight.
    /// Returns `LoginError::NotFound` if nothing is registered to the number.
    /// Returns `LoginError::Connection` if the rental API failed.
    pub async fn login(&mut self, input: &str) -> Result<&RecordSet, LoginError> {
        if !self.state.is_interactive() {
            return Err(LoginError::InProgress);
        }

        let phone = Phone::parse(input)?;

        self.state.phase = LoginPhase::Submitting;
        tracing::debug!("Submitting login");

        match self.source.containers_by_phone(&phone).await {
            Lookup::Found(records) => {
                tracing::info!(containers = records.len(), "Logged in");

                if let Err(e) = self.store.remember_phone(&phone) {
                    tracing::warn!(error = %e, "Failed to remember phone number");
                }

                self.state.phase = LoginPhase::Rendered;
                self.state.phone = Some(phone);
                Ok(self.state.records.insert(records))
            }
            Lookup::NotFound => {
                tracing::warn!("No containers for phone number");
                self.state.phase = LoginPhase::Idle;
                Err(LoginError::NotFound)
            }
            Lookup::Unavailable(e) => {
                self.state.phase = LoginPhase::Idle;
                Err(LoginError::Connection(e))
            }
        }
    }

    /// Log in again with the remembered phone number, if there is one.
    ///
    /// Returns `None` when no phone number is remembered. An unreadable
    /// session is logged and treated as no session.
    pub async fn resume(&mut self) -> Option<Result<&RecordSet, LoginError>> {
        let phone = match self.store.load() {
            Ok(session) => session.phone?,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable session");
                return None;
            }
        };

        Some(self.login(phone.as_str()).await)
    }

    /// Drop the loaded records and forget the remembered phone number.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be updated. The in-memory
    /// state is reset either way.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.state = AppState::default();
        self.store.forget_phone()
    }

    /// Current theme. An unreadable session falls back to the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.store
            .load()
            .map(|session| session.theme)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Using default theme");
                Theme::default()
            })
    }

    /// Switch to the other theme, persist it and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be updated.
    pub fn toggle_theme(&self) -> Result<Theme, SessionError> {
        self.store.toggle_theme()
    }
}
