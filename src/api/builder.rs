use super::SteamMarketAPI;
use super::endpoints::Endpoints;
use crate::SteamID;
use crate::config::{MarketConfig, TransportConfig};
use crate::error::Error;
use crate::extractor::FieldExtractor;
use crate::helpers::{get_default_client, USER_AGENT_STRING};
use std::sync::{Arc, RwLock};
use reqwest::cookie::Jar;
use reqwest_middleware::ClientWithMiddleware;

/// Builder for constructing a [`SteamMarketAPI`].
#[derive(Debug, Clone)]
pub struct SteamMarketAPIBuilder {
    /// The account that owns the inventory and places sell orders.
    pub(crate) steamid: SteamID,
    /// Which market to target and how to query it.
    pub(crate) config: MarketConfig,
    /// Options for the client. Ignored if a client is supplied.
    pub(crate) transport: TransportConfig,
    /// Request cookies.
    pub(crate) cookie_jar: Option<Arc<Jar>>,
    /// Client to use for requests. Remember to also include the cookies connected to this client.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// User agent for requests.
    pub(crate) user_agent: &'static str,
    /// Patterns for values extracted from HTML.
    pub(crate) extractor: FieldExtractor,
}

impl SteamMarketAPIBuilder {
    /// Creates a new [`SteamMarketAPIBuilder`].
    pub fn new(steamid: SteamID, config: MarketConfig) -> Self {
        Self {
            steamid,
            config,
            transport: TransportConfig::default(),
            cookie_jar: None,
            client: None,
            user_agent: USER_AGENT_STRING,
            extractor: FieldExtractor::default(),
        }
    }

    /// Timeout, proxy and default headers for the client.
    pub fn transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    /// User agent for requests.
    pub fn user_agent(mut self, user_agent: &'static str) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Client to use for requests. It is also required to include the associated cookies with this
    /// client so that the `set_cookies` method works as expected.
    pub fn client(mut self, client: ClientWithMiddleware, cookies: Arc<Jar>) -> Self {
        self.client = Some(client);
        self.cookie_jar = Some(cookies);
        self
    }

    /// Patterns for values extracted from HTML.
    pub fn extractor(mut self, extractor: FieldExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Builds the [`SteamMarketAPI`].
    pub fn build(self) -> Result<SteamMarketAPI, Error> {
        let endpoints = Endpoints::new(self.steamid, &self.config)?;
        let cookies = self.cookie_jar
            .unwrap_or_else(|| Arc::new(Jar::default()));
        let client = match self.client {
            Some(client) => client,
            None => get_default_client(
                Some(Arc::clone(&cookies)),
                self.user_agent,
                &self.transport,
            )?,
        };

        Ok(SteamMarketAPI {
            client,
            cookies,
            sessionid: Arc::new(RwLock::new(None)),
            steamid: self.steamid,
            config: Arc::new(self.config),
            endpoints: Arc::new(endpoints),
            extractor: Arc::new(self.extractor),
        })
    }
}
