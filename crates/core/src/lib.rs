//! Container Portal Core - Shared types library.
//!
//! This crate provides the types and derivations used by every component of
//! the container rental portal:
//! - `client` - Remote API gateway, session persistence and the login flow
//! - `cli` - The `portal` command-line client
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no clock. Anything time-dependent takes the current instant as an
//! argument so it can be tested deterministically.
//!
//! # Modules
//!
//! - [`types`] - Phone numbers, container records, statuses and themes
//! - [`dashboard`] - Active/overdue derivations over a customer's record set

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod dashboard;
pub mod types;

pub use dashboard::{ContainerDetails, ContainerRow, Dashboard, OVERDUE_THRESHOLD_DAYS, RowStatus};
pub use types::*;
