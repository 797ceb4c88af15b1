//! Customer phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input is empty or only whitespace.
    #[error("phone number cannot be empty")]
    Empty,
}

/// A customer phone number, used as the login key for the portal.
///
/// The remote API owns the lookup, so the only validation done here is that
/// the number is not blank. Surrounding whitespace is trimmed.
///
/// ## Examples
///
/// ```
/// use container_portal_core::Phone;
///
/// let phone = Phone::parse("  0501234567 ").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
///
/// assert!(Phone::parse("").is_err());
/// assert!(Phone::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Parse a `Phone` from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PhoneError::Empty);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(Phone::parse("0501234567").is_ok());
        assert!(Phone::parse("+972-50-123-4567").is_ok());
        assert!(Phone::parse("1").is_ok());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let phone = Phone::parse("\t0501234567  ").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Phone::parse(""), Err(PhoneError::Empty));
        assert_eq!(Phone::parse("  \n "), Err(PhoneError::Empty));
    }

    #[test]
    fn test_parse_accepts_any_length() {
        let long = "5".repeat(100);
        assert_eq!(Phone::parse(&long).unwrap().as_str(), long);
    }

    #[test]
    fn test_display() {
        let phone = Phone::parse("0501234567").unwrap();
        assert_eq!(format!("{phone}"), "0501234567");
    }

    #[test]
    fn test_serde_roundtrip() {
        let phone = Phone::parse("0501234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0501234567\"");

        let parsed: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, phone);
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<Phone>("\"  \"").is_err());
    }

    #[test]
    fn test_from_str() {
        let phone: Phone = "0501234567".parse().unwrap();
        assert_eq!(phone.into_inner(), "0501234567");
    }
}
