//! Raw responses from market endpoints.

use crate::error::Error;
use crate::extractor::{Field, FieldExtractor};
use crate::response::{deserializers, steam_tax_ratio, InventoryEntry, MarketSnapshot, OrderBookSnapshot};
use crate::types::Price;
use serde::Deserialize;

/// An asset in an inventory response.
#[derive(Deserialize, Debug, Clone)]
pub struct RawAsset {
    /// The asset ID.
    pub assetid: String,
    /// The class ID of the asset's description.
    pub classid: String,
}

/// A description in an inventory response.
#[derive(Deserialize, Debug, Clone)]
pub struct RawDescription {
    /// The class ID this description belongs to.
    pub classid: String,
    /// The name used to look the item up on the market.
    pub market_hash_name: String,
}

/// The response from the inventory endpoint.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct GetInventoryResponse {
    /// Present for public inventories, even when empty.
    #[serde(default)]
    pub total_inventory_count: Option<u64>,
    #[serde(default)]
    pub assets: Option<Vec<RawAsset>>,
    #[serde(default)]
    pub descriptions: Option<Vec<RawDescription>>,
}

impl GetInventoryResponse {
    /// Joins assets with their descriptions on class ID, in asset order. The first description
    /// matching an asset is used. Assets without a description are skipped. The result is empty
    /// when either `total_inventory_count` or `assets` is missing.
    pub fn into_entries(self) -> Vec<InventoryEntry> {
        let assets = match (self.total_inventory_count, self.assets) {
            (Some(_), Some(assets)) => assets,
            _ => return Vec::new(),
        };
        let descriptions = self.descriptions.unwrap_or_default();

        assets
            .into_iter()
            .filter_map(|asset| {
                descriptions
                    .iter()
                    .find(|description| description.classid == asset.classid)
                    .map(|description| InventoryEntry {
                        asset_id: asset.assetid,
                        market_hash_name: description.market_hash_name.clone(),
                    })
            })
            .collect()
    }
}

/// A listing in a listings render response.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct RawListingInfo {
    #[serde(default)]
    pub converted_price: Option<Price>,
    #[serde(default)]
    pub converted_fee: Option<Price>,
}

/// The response from the listings render endpoint.
#[derive(Deserialize, Debug)]
pub struct GetListingsRenderResponse {
    #[serde(default)]
    pub total_count: Option<u64>,
    /// Listings in the order they appear in the response.
    #[serde(default, deserialize_with = "deserializers::map_values_or_seq")]
    pub listinginfo: Vec<RawListingInfo>,
}

impl GetListingsRenderResponse {
    /// Builds a snapshot from the first listing.
    pub fn into_snapshot(self) -> Result<MarketSnapshot, Error> {
        let listing = self.listinginfo
            .first()
            .ok_or(Error::MissingData("listinginfo"))?;
        let converted_price = listing.converted_price
            .ok_or(Error::MissingData("converted_price"))?;
        let converted_fee = listing.converted_fee
            .ok_or(Error::MissingData("converted_fee"))?;
        let total_count = self.total_count
            .ok_or(Error::MissingData("total_count"))?;
        let steam_tax_ratio = steam_tax_ratio(converted_price, converted_fee)
            .ok_or(Error::MissingData("converted_price"))?;

        Ok(MarketSnapshot {
            converted_price,
            total_count,
            steam_tax_ratio,
        })
    }
}

/// The response from the order histogram endpoint.
#[derive(Deserialize, Debug)]
pub struct GetOrderHistogramResponse {
    #[serde(default, deserialize_with = "deserializers::option_number_or_string")]
    pub highest_buy_order: Option<Price>,
    /// HTML fragment summarizing the buy orders.
    #[serde(default)]
    pub buy_order_summary: Option<String>,
}

impl GetOrderHistogramResponse {
    /// Builds a snapshot, extracting the number of buy orders from `buy_order_summary`.
    pub fn into_snapshot(
        self,
        extractor: &FieldExtractor,
    ) -> Result<OrderBookSnapshot, Error> {
        let highest_buy_order = self.highest_buy_order
            .ok_or(Error::MissingData("highest_buy_order"))?;
        let buy_order_summary = self.buy_order_summary
            .ok_or(Error::MissingData("buy_order_summary"))?;
        let wanted_cnt = extractor.extract_parsed::<u64>(Field::WantedCount, &buy_order_summary)?;

        Ok(OrderBookSnapshot {
            highest_buy_order,
            wanted_cnt,
        })
    }
}

/// The response from the sell endpoint.
#[derive(Deserialize, Debug)]
pub struct SellItemResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseHtmlError;

    fn entry(asset_id: &str, market_hash_name: &str) -> InventoryEntry {
        InventoryEntry {
            asset_id: asset_id.into(),
            market_hash_name: market_hash_name.into(),
        }
    }

    #[test]
    fn joins_inventory_fixture() {
        let response: GetInventoryResponse = serde_json::from_str(include_str!("fixtures/inventory.json")).unwrap();

        assert_eq!(response.into_entries(), vec![
            entry("27348215113", "Treasure of the Crimson Witness"),
            entry("27348215114", "Genuine Bow of the Howling Wind"),
            entry("27348215116", "Treasure of the Crimson Witness"),
        ]);
    }

    #[test]
    fn joins_single_asset() {
        let response: GetInventoryResponse = serde_json::from_str(r#"{
            "assets": [{"assetid": "A1", "classid": "C1"}],
            "descriptions": [{"classid": "C1", "market_hash_name": "Widget"}],
            "total_inventory_count": 1
        }"#).unwrap();

        assert_eq!(response.into_entries(), vec![entry("A1", "Widget")]);
    }

    #[test]
    fn first_matching_description_wins() {
        let response: GetInventoryResponse = serde_json::from_str(r#"{
            "assets": [{"assetid": "A2", "classid": "C2"}, {"assetid": "A1", "classid": "C1"}],
            "descriptions": [
                {"classid": "C1", "market_hash_name": "First"},
                {"classid": "C1", "market_hash_name": "Second"},
                {"classid": "C2", "market_hash_name": "Other"}
            ],
            "total_inventory_count": 2
        }"#).unwrap();

        assert_eq!(response.into_entries(), vec![entry("A2", "Other"), entry("A1", "First")]);
    }

    #[test]
    fn inventory_without_count_is_empty() {
        let response: GetInventoryResponse = serde_json::from_str(r#"{
            "assets": [{"assetid": "A1", "classid": "C1"}],
            "descriptions": [{"classid": "C1", "market_hash_name": "Widget"}]
        }"#).unwrap();

        assert!(response.into_entries().is_empty());
    }

    #[test]
    fn inventory_without_assets_is_empty() {
        let response: GetInventoryResponse = serde_json::from_str(r#"{
            "total_inventory_count": 0,
            "success": 1,
            "rwgrsn": -2
        }"#).unwrap();

        assert!(response.into_entries().is_empty());
    }

    #[test]
    fn inventory_without_descriptions_is_empty() {
        let response: GetInventoryResponse = serde_json::from_str(r#"{
            "assets": [{"assetid": "A1", "classid": "C1"}],
            "total_inventory_count": 1
        }"#).unwrap();

        assert!(response.into_entries().is_empty());
    }

    #[test]
    fn builds_market_snapshot() {
        let response: GetListingsRenderResponse = serde_json::from_str(include_str!("fixtures/listings_render.json")).unwrap();
        let snapshot = response.into_snapshot().unwrap();

        assert_eq!(snapshot.converted_price, 1043);
        assert_eq!(snapshot.total_count, 37);
        assert_eq!(snapshot.steam_tax_ratio, 1043.0 / (1043.0 + 155.0));
    }

    #[test]
    fn uses_first_listing() {
        let response: GetListingsRenderResponse = serde_json::from_str(r#"{
            "total_count": 2,
            "listinginfo": {
                "2": {"converted_price": 100, "converted_fee": 15},
                "1": {"converted_price": 200, "converted_fee": 30}
            }
        }"#).unwrap();

        assert_eq!(response.into_snapshot().unwrap().converted_price, 100);
    }

    #[test]
    fn empty_listings_is_missing_data() {
        let response: GetListingsRenderResponse = serde_json::from_str(include_str!("fixtures/listings_render_empty.json")).unwrap();

        assert!(matches!(response.into_snapshot(), Err(Error::MissingData("listinginfo"))));
    }

    #[test]
    fn listing_without_fee_is_missing_data() {
        let response: GetListingsRenderResponse = serde_json::from_str(r#"{
            "total_count": 1,
            "listinginfo": {"1": {"price": 100, "fee": 15}}
        }"#).unwrap();

        assert!(matches!(response.into_snapshot(), Err(Error::MissingData("converted_price"))));
    }

    #[test]
    fn zero_priced_listing_is_missing_data() {
        let response: GetListingsRenderResponse = serde_json::from_str(r#"{
            "total_count": 1,
            "listinginfo": {"1": {"converted_price": 0, "converted_fee": 0}}
        }"#).unwrap();

        assert!(matches!(response.into_snapshot(), Err(Error::MissingData("converted_price"))));
    }

    #[test]
    fn builds_order_book_snapshot() {
        let response: GetOrderHistogramResponse = serde_json::from_str(include_str!("fixtures/order_histogram.json")).unwrap();
        let snapshot = response.into_snapshot(&FieldExtractor::default()).unwrap();

        assert_eq!(snapshot, OrderBookSnapshot {
            highest_buy_order: 861,
            wanted_cnt: 215,
        });
    }

    #[test]
    fn order_summary_without_count_is_parse_error() {
        let response: GetOrderHistogramResponse = serde_json::from_str(r#"{
            "highest_buy_order": "861",
            "buy_order_summary": "<span>There are no active buy orders for this item.</span>"
        }"#).unwrap();
        let result = response.into_snapshot(&FieldExtractor::default());

        assert!(matches!(result, Err(Error::Html(ParseHtmlError::MissingField(Field::WantedCount)))));
    }

    #[test]
    fn no_buy_orders_is_missing_data() {
        let response: GetOrderHistogramResponse = serde_json::from_str(r#"{
            "highest_buy_order": null,
            "buy_order_summary": ""
        }"#).unwrap();
        let result = response.into_snapshot(&FieldExtractor::default());

        assert!(matches!(result, Err(Error::MissingData("highest_buy_order"))));
    }
}
