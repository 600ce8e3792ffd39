//! HTTP client for the options and submission endpoints
//!
//! Both endpoints speak JSON. Any status outside 2xx is reported as
//! [`ApiError::Status`]; the caller decides how much of that to surface.

use super::error::ApiError;
use super::traits::RegistrationApi;
use crate::config::AppConfig;
use crate::state::{FormData, OptionLists};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

/// Client for the registration endpoints
pub struct RegistrationClient {
    http: Client,
    options_url: String,
    submit_url: String,
}

impl RegistrationClient {
    /// Create a client from configuration
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            options_url: config.options_url.clone(),
            submit_url: config.submit_url.clone(),
        })
    }
}

#[async_trait]
impl RegistrationApi for RegistrationClient {
    async fn fetch_options(&self) -> Result<OptionLists, ApiError> {
        tracing::debug!("Fetching options from {}", self.options_url);
        let response = self.http.get(&self.options_url).send().await?;
        let body = ensure_success(response)?.text().await?;
        parse_options(&body)
    }

    async fn submit(&self, data: &FormData) -> Result<(), ApiError> {
        tracing::debug!("Submitting registration to {}", self.submit_url);
        let response = self.http.post(&self.submit_url).json(data).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}

/// Reject any response whose status is not 2xx
fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

/// Decode the options endpoint body
fn parse_options(body: &str) -> Result<OptionLists, ApiError> {
    Ok(serde_json::from_str(body)?)
}
