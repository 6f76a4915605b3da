use crate::SteamID;
use crate::config::MarketConfig;
use crate::error::ParameterError;
use url::Url;

/// Appends path segments to `base`. Each segment is percent-encoded, so an item name containing
/// `/` stays a single segment.
fn with_segments<I>(
    base: &Url,
    segments: I,
) -> Result<Url, ParameterError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut url = base.clone();

    {
        let mut path = url.path_segments_mut()
            .map_err(|_| ParameterError::CannotBeABase(base.to_string()))?;

        path.pop_if_empty().extend(segments);
    }

    Ok(url)
}

/// Endpoint URLs bound to an account and app.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// `/inventory/{steamid}/{appid}/{contextid}`
    pub inventory: Url,
    /// `/market/sellitem`
    pub sell: Url,
    /// `/market/itemordershistogram`
    pub order_histogram: Url,
    /// Referer sent when selling.
    pub referer: String,
    /// `/market/listings/{appid}`
    listings: Url,
}

impl Endpoints {
    pub fn new(
        steamid: SteamID,
        config: &MarketConfig,
    ) -> Result<Self, ParameterError> {
        let base = &config.base_url;
        let steamid = u64::from(steamid).to_string();
        let appid = config.appid.to_string();
        let contextid = config.contextid.to_string();
        let referer = match &config.referer {
            Some(referer) => referer.clone(),
            None => with_segments(base, ["id", ""])?.to_string(),
        };

        Ok(Self {
            inventory: with_segments(base, ["inventory", steamid.as_str(), appid.as_str(), contextid.as_str()])?,
            sell: with_segments(base, ["market", "sellitem"])?,
            order_histogram: with_segments(base, ["market", "itemordershistogram"])?,
            listings: with_segments(base, ["market", "listings", appid.as_str()])?,
            referer,
        })
    }

    /// The listings page for an item.
    pub fn listings(&self, market_hash_name: &str) -> Result<Url, ParameterError> {
        with_segments(&self.listings, [market_hash_name])
    }

    /// The listings render endpoint for an item.
    pub fn listings_render(&self, market_hash_name: &str) -> Result<Url, ParameterError> {
        with_segments(&self.listings, [market_hash_name, "render"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new(SteamID::from(76561198000000000), &MarketConfig::new(570)).unwrap()
    }

    #[test]
    fn binds_endpoints() {
        let endpoints = endpoints();

        assert_eq!(endpoints.inventory.as_str(), "https://steamcommunity.com/inventory/76561198000000000/570/2");
        assert_eq!(endpoints.sell.as_str(), "https://steamcommunity.com/market/sellitem");
        assert_eq!(endpoints.order_histogram.as_str(), "https://steamcommunity.com/market/itemordershistogram");
        assert_eq!(endpoints.referer, "https://steamcommunity.com/id/");
    }

    #[test]
    fn encodes_item_name() {
        let endpoints = endpoints();

        assert_eq!(
            endpoints.listings("Genuine Bow of the Howling Wind").unwrap().as_str(),
            "https://steamcommunity.com/market/listings/570/Genuine%20Bow%20of%20the%20Howling%20Wind",
        );
        assert_eq!(
            endpoints.listings_render("Genuine Bow of the Howling Wind").unwrap().as_str(),
            "https://steamcommunity.com/market/listings/570/Genuine%20Bow%20of%20the%20Howling%20Wind/render",
        );
        assert_eq!(
            endpoints.listings("1/2 Price").unwrap().as_str(),
            "https://steamcommunity.com/market/listings/570/1%2F2%20Price",
        );
    }

    #[test]
    fn keeps_base_path() {
        let mut config = MarketConfig::new(730);

        config.base_url = Url::parse("http://localhost:8080/steam/").unwrap();
        config.contextid = 6;

        let endpoints = Endpoints::new(SteamID::from(76561198000000000), &config).unwrap();

        assert_eq!(endpoints.inventory.as_str(), "http://localhost:8080/steam/inventory/76561198000000000/730/6");
        assert_eq!(endpoints.referer, "http://localhost:8080/steam/id/");
    }

    #[test]
    fn rejects_base_without_path() {
        let mut config = MarketConfig::new(570);

        config.base_url = Url::parse("mailto:market@example.com").unwrap();

        assert!(matches!(
            Endpoints::new(SteamID::from(76561198000000000), &config),
            Err(ParameterError::CannotBeABase(_)),
        ));
    }
}
