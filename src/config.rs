//! Configuration values.
//!
//! Everything here is immutable once a client is built, and everything can be deserialized so
//! callers can keep configuration in whatever file format they like.

use crate::enums::{Currency, Language};
use crate::types::{AppId, ContextId};
use std::collections::HashMap;
use std::time::Duration;
use serde::Deserialize;
use url::Url;

/// The default origin for market requests.
pub const DEFAULT_BASE_URL: &str = "https://steamcommunity.com";
/// The default number of items requested from the inventory endpoint.
pub const DEFAULT_INVENTORY_COUNT: u32 = 2000;

fn default_base_url() -> Url {
    // Parsing a constant that is known to be valid.
    Url::parse(DEFAULT_BASE_URL)
        .unwrap_or_else(|error| panic!("URL could not be parsed from {DEFAULT_BASE_URL}: {error}"))
}

fn default_contextid() -> ContextId {
    2
}

fn default_currency() -> Currency {
    Currency::CNY
}

fn default_language() -> Language {
    Language::ChineseSimplified
}

fn default_inventory_count() -> u32 {
    DEFAULT_INVENTORY_COUNT
}

/// Which market to target and how to query it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MarketConfig {
    /// The origin all market endpoints are relative to.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// The app whose items are traded.
    pub appid: AppId,
    /// The inventory context for the app. Defaults to `2`.
    #[serde(default = "default_contextid")]
    pub contextid: ContextId,
    /// Currency that prices are converted to. Defaults to [`Currency::CNY`].
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Language for inventory descriptions and order summaries. Defaults to
    /// [`Language::ChineseSimplified`].
    #[serde(default = "default_language")]
    pub language: Language,
    /// The number of items to request from the inventory endpoint. Defaults to 2000.
    #[serde(default = "default_inventory_count")]
    pub inventory_count: u32,
    /// The referer sent when selling. Defaults to `<base_url>/id/`.
    #[serde(default)]
    pub referer: Option<String>,
}

impl MarketConfig {
    /// Creates a new [`MarketConfig`] for `appid` with the defaults for everything else.
    pub fn new(appid: AppId) -> Self {
        Self {
            base_url: default_base_url(),
            appid,
            contextid: default_contextid(),
            currency: default_currency(),
            language: default_language(),
            inventory_count: default_inventory_count(),
            referer: None,
        }
    }
}

/// Options for the HTTP client.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TransportConfig {
    /// Total timeout for each request in seconds. No timeout when `None`.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Proxy URL for all requests.
    #[serde(default)]
    pub proxy: Option<String>,
    /// Headers added to every request.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl TransportConfig {
    /// The request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Where and how to accept pending confirmations.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ConfirmationConfig {
    /// The URL that accepts all pending confirmations when posted to.
    pub accept_url: Url,
    /// Options for the HTTP client, e.g. an authentication header.
    #[serde(default)]
    pub transport: TransportConfig,
}
