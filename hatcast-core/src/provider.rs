use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    config::{ApiKey, Location},
    error::Error,
};

pub mod wunderground;

/// Source of raw current-conditions responses.
///
/// Implementations hand back the raw body text; parsing is a separate step
/// so a malformed response can still be shown to the user whole.
#[async_trait]
pub trait ConditionsProvider: Send + Sync + Debug {
    async fn fetch_conditions(
        &self,
        api_key: &ApiKey,
        location: &Location,
    ) -> Result<String, Error>;
}
