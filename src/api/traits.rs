//! Trait abstraction for the registration endpoints to enable mocking in tests

use super::error::ApiError;
use crate::state::{FormData, OptionLists};
use async_trait::async_trait;

/// Remote collaborators of the registration form
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Fetch the selectable occupations and states
    async fn fetch_options(&self) -> Result<OptionLists, ApiError>;

    /// Post the completed form; any non-2xx answer is an error
    async fn submit(&self, data: &FormData) -> Result<(), ApiError>;
}
