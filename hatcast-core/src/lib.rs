//! Core library for the `hatcast` CLI.
//!
//! This crate defines:
//! - API key loading and the fixed default location
//! - Abstraction over conditions providers
//! - Response parsing and the hat recommendation rule
//!
//! It is used by `hatcast-cli`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod recommend;

pub use config::{ApiKey, KEY_FILE, Location};
pub use error::Error;
pub use model::Conditions;
pub use provider::{ConditionsProvider, wunderground::WundergroundClient};
pub use recommend::{HAT_THRESHOLD_F, Recommendation};
