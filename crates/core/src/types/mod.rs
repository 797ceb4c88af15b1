//! Core types for the container portal.
//!
//! This module provides type-safe wrappers for the portal's domain concepts.

pub mod phone;
pub mod record;
pub mod status;
pub mod theme;

pub use phone::{Phone, PhoneError};
pub use record::{ContainerRecord, RecordSet};
pub use status::ContainerStatus;
pub use theme::{Theme, ThemeParseError};
