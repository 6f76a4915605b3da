//! The client for market requests.

mod builder;
mod endpoints;
mod helpers;
pub mod response;

pub use builder::SteamMarketAPIBuilder;

use endpoints::Endpoints;
use response::{GetListingsRenderResponse, GetOrderHistogramResponse};
use crate::SteamID;
use crate::config::MarketConfig;
use crate::error::{Error, Result, SetCookiesError};
use crate::extractor::{Field, FieldExtractor};
use crate::helpers::{check_response, get_sessionid_from_cookies, parses_response, text_response};
use crate::response::{InventoryEntry, MarketData, MarketSnapshot, OrderBookSnapshot};
use crate::types::{AppId, ContextId, HttpClient};
use std::sync::{Arc, PoisonError, RwLock};
use reqwest::cookie::Jar;
use reqwest::header::REFERER;
use serde::Serialize;

/// A session with the market for one account and app.
///
/// Cloning is cheap. Clones share the same client, cookies and session ID.
#[derive(Debug, Clone)]
pub struct SteamMarketAPI {
    /// The client for making requests.
    client: HttpClient,
    /// The cookies to make requests with. Since the requests are made with the provided client,
    /// the cookies should be the same as what the client uses.
    cookies: Arc<Jar>,
    /// The session ID from the cookies, required for selling.
    sessionid: Arc<RwLock<Option<String>>>,
    /// The account.
    steamid: SteamID,
    /// Which market to target and how to query it.
    config: Arc<MarketConfig>,
    /// Endpoints bound to the account and app.
    endpoints: Arc<Endpoints>,
    /// Patterns for values extracted from HTML.
    extractor: Arc<FieldExtractor>,
}

impl SteamMarketAPI {
    /// Builder for constructing a [`SteamMarketAPI`].
    pub fn builder(steamid: SteamID, config: MarketConfig) -> SteamMarketAPIBuilder {
        SteamMarketAPIBuilder::new(steamid, config)
    }

    /// Sets cookies, e.g. `sessionid` and `steamLoginSecure`.
    ///
    /// Selling requires the `sessionid` cookie. Make sure your cookies are set before selling.
    pub fn set_cookies(
        &self,
        cookies: Vec<String>,
    ) -> std::result::Result<(), SetCookiesError> {
        let sessionid = get_sessionid_from_cookies(&cookies)
            .ok_or(SetCookiesError::MissingSessionID)?;

        for cookie_str in &cookies {
            self.cookies.add_cookie_str(cookie_str, &self.config.base_url);
        }

        *self.sessionid.write().unwrap_or_else(PoisonError::into_inner) = Some(sessionid);

        Ok(())
    }

    /// The session ID from the last cookies that were set.
    pub fn sessionid(&self) -> Option<String> {
        self.sessionid
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The account.
    pub fn steamid(&self) -> SteamID {
        self.steamid
    }

    /// The configuration.
    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Gets the sellable items in the inventory. A private or empty inventory gives an empty
    /// list.
    pub async fn inventory(&self) -> Result<Vec<InventoryEntry>> {
        let query = [
            ("l", self.config.language.api_language_code().to_string()),
            ("count", self.config.inventory_count.to_string()),
        ];

        log::debug!("Getting inventory from {}", self.endpoints.inventory);

        let response = self.client.get(self.endpoints.inventory.clone())
            .query(&query)
            .send()
            .await?;

        helpers::inventory_response(response).await
    }

    /// Gets the price, fee ratio and listing count from the current lowest listing.
    ///
    /// Fails with [`Error::RateLimited`] on HTTP 429. Nothing is retried.
    pub async fn listings_data(
        &self,
        market_hash_name: &str,
    ) -> Result<MarketSnapshot> {
        let uri = self.endpoints.listings_render(market_hash_name)?;
        let query = [
            ("count", 1),
            ("currency", self.config.currency.code()),
        ];

        log::debug!("Getting listings from {uri}");

        let response = self.client.get(uri)
            .query(&query)
            .send()
            .await?;
        let body: GetListingsRenderResponse = parses_response(response).await?;

        body.into_snapshot()
    }

    /// Gets the highest buy order and the number of buy orders.
    ///
    /// This takes two requests: the listings page to find the item name ID, then the order
    /// histogram for that ID. The order book may change between them.
    pub async fn orders_data(
        &self,
        market_hash_name: &str,
    ) -> Result<OrderBookSnapshot> {
        let uri = self.endpoints.listings(market_hash_name)?;

        log::debug!("Getting item name ID from {uri}");

        let response = self.client.get(uri)
            .send()
            .await?;
        let body = text_response(response).await?;
        let item_nameid = self.extractor.extract(Field::ItemNameId, &body)?;
        let query = [
            ("language", self.config.language.api_language_code().to_string()),
            ("currency", self.config.currency.code().to_string()),
            ("item_nameid", item_nameid.to_string()),
        ];
        let response = self.client.get(self.endpoints.order_histogram.clone())
            .query(&query)
            .send()
            .await?;
        let body: GetOrderHistogramResponse = parses_response(response).await?;

        body.into_snapshot(&self.extractor)
    }

    /// Gets listing and order book data concurrently. Fails with the first error.
    pub async fn market_data(
        &self,
        market_hash_name: &str,
    ) -> Result<MarketData> {
        let (listings, orders) = futures::try_join!(
            self.listings_data(market_hash_name),
            self.orders_data(market_hash_name)
        )?;

        Ok(MarketData {
            market_hash_name: market_hash_name.to_string(),
            listings,
            orders,
        })
    }

    /// Lists an item for sale. `after_tax_price` is what you receive, in the smallest unit of the
    /// configured currency.
    ///
    /// Returns whether the market accepted the listing. An accepted listing usually still needs a
    /// mobile confirmation, see [`crate::ConfirmationAPI`].
    pub async fn sell(
        &self,
        after_tax_price: u32,
        asset_id: &str,
    ) -> Result<bool> {
        #[derive(Serialize, Debug)]
        struct SellItemParams<'a> {
            sessionid: &'a str,
            appid: AppId,
            contextid: ContextId,
            assetid: &'a str,
            amount: u32,
            price: u32,
        }

        let sessionid = self.sessionid()
            .ok_or(Error::NotLoggedIn)?;
        let params = SellItemParams {
            sessionid: &sessionid,
            appid: self.config.appid,
            contextid: self.config.contextid,
            assetid: asset_id,
            amount: 1,
            price: after_tax_price,
        };

        log::debug!("Selling {asset_id} for {after_tax_price}");

        let response = self.client.post(self.endpoints.sell.clone())
            .header(REFERER, self.endpoints.referer.as_str())
            .form(&params)
            .send()
            .await?;
        let body = check_response(response).await?;

        helpers::sell_result(&body)
    }

    /// Gets listings that are priced above the market. Not supported yet.
    pub async fn overpriced(&self) -> Result<Vec<InventoryEntry>> {
        Err(Error::Unsupported("overpriced"))
    }

    /// Removes a listing. Not supported yet.
    pub async fn remove(&self, _listing_id: &str) -> Result<bool> {
        Err(Error::Unsupported("remove"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> SteamMarketAPI {
        SteamMarketAPI::builder(SteamID::from(76561198000000000), MarketConfig::new(570))
            .build()
            .unwrap()
    }

    #[test]
    fn sets_sessionid_from_cookies() {
        let api = api();

        assert_eq!(api.sessionid(), None);

        api.set_cookies(vec![
            "sessionid=0123456789abcdef".into(),
            "steamLoginSecure=76561198000000000%7C%7Ctoken".into(),
        ]).unwrap();

        assert_eq!(api.sessionid().as_deref(), Some("0123456789abcdef"));
    }

    #[test]
    fn clones_share_session() {
        let api = api();
        let clone = api.clone();

        api.set_cookies(vec!["sessionid=shared".into()]).unwrap();

        assert_eq!(clone.sessionid().as_deref(), Some("shared"));
    }

    #[test]
    fn cookies_without_sessionid_are_rejected() {
        let api = api();
        let result = api.set_cookies(vec!["steamLoginSecure=token".into()]);

        assert!(matches!(result, Err(SetCookiesError::MissingSessionID)));
        assert_eq!(api.sessionid(), None);
    }

    #[tokio::test]
    async fn selling_without_session_is_not_logged_in() {
        let result = api().sell(100, "27348215113").await;

        assert!(matches!(result, Err(Error::NotLoggedIn)));
    }

    #[tokio::test]
    async fn unimplemented_operations_are_unsupported() {
        let api = api();

        assert!(matches!(api.overpriced().await, Err(Error::Unsupported("overpriced"))));
        assert!(matches!(api.remove("4452891217358721346").await, Err(Error::Unsupported("remove"))));
    }

    #[test]
    fn invalid_proxy_fails_to_build() {
        let transport = crate::config::TransportConfig {
            proxy: Some("not a proxy".into()),
            ..Default::default()
        };
        let result = SteamMarketAPI::builder(SteamID::from(76561198000000000), MarketConfig::new(570))
            .transport(transport)
            .build();

        assert!(result.is_err());
    }
}
