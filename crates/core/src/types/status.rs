//! Rental status of a container.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Status of a container rental, as written in the rental spreadsheet.
///
/// The spreadsheet holds free text, but exactly one value is meaningful to
/// the portal: [`ContainerStatus::CLOSED`] marks a rental whose container has
/// been returned. Every other value counts as an active rental and is shown
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ContainerStatus(String);

impl ContainerStatus {
    /// Status value of a closed (returned) rental.
    pub const CLOSED: &'static str = "סגור";

    /// Create a status from its spreadsheet value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The closed status.
    #[must_use]
    pub fn closed() -> Self {
        Self(Self::CLOSED.to_owned())
    }

    /// Returns `true` if the rental is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.0 == Self::CLOSED
    }

    /// Returns `true` if the container is still out with the customer.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_closed()
    }

    /// Returns the raw status value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContainerStatus {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_value() {
        assert!(ContainerStatus::closed().is_closed());
        assert!(ContainerStatus::new("סגור").is_closed());
    }

    #[test]
    fn test_everything_else_is_active() {
        for value in ["פעיל", "active", "", "סגור ", "closed"] {
            assert!(ContainerStatus::new(value).is_active(), "{value:?}");
        }
    }

    #[test]
    fn test_display_is_verbatim() {
        assert_eq!(ContainerStatus::new("בהמתנה").to_string(), "בהמתנה");
    }
}
