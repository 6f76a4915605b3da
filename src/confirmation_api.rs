//! Accepting pending confirmations through an external two-factor service.
//!
//! Listings placed with [`crate::SteamMarketAPI::sell`] usually need a mobile confirmation
//! before they appear on the market. That approval happens outside of the market session, through
//! a service holding the account's authenticator, such as an ArchiSteamFarm instance. The URL
//! and credentials for that service are supplied as [`ConfirmationConfig`] and are not checked
//! here.

use crate::config::ConfirmationConfig;
use crate::error::Result;
use crate::helpers::{get_default_client, parses_response, USER_AGENT_STRING};
use crate::types::HttpClient;
use serde::Deserialize;
use url::Url;

#[derive(Deserialize, Debug)]
struct ConfirmResponse {
    #[serde(rename = "Success")]
    success: bool,
    #[serde(rename = "Message", default)]
    message: Option<String>,
}

/// Client for the two-factor confirmation service.
#[derive(Debug, Clone)]
pub struct ConfirmationAPI {
    /// The client for making requests.
    client: HttpClient,
    /// The URL that accepts all pending confirmations.
    accept_url: Url,
}

impl ConfirmationAPI {
    /// Creates a new [`ConfirmationAPI`]. Fails if the transport options are invalid.
    pub fn new(config: ConfirmationConfig) -> Result<Self> {
        let client = get_default_client(None, USER_AGENT_STRING, &config.transport)?;

        Ok(Self {
            client,
            accept_url: config.accept_url,
        })
    }

    /// Accepts pending confirmations. Returns the service's `Success` flag.
    pub async fn confirm(&self) -> Result<bool> {
        log::debug!("Accepting confirmations at {}", self.accept_url);

        let response = self.client.post(self.accept_url.clone())
            .send()
            .await?;
        let body: ConfirmResponse = parses_response(response).await?;

        if !body.success {
            log::debug!("Confirmations not accepted: {}", body.message.as_deref().unwrap_or("no message"));
        }

        Ok(body.success)
    }
}
