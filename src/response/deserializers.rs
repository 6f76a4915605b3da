//! Deserializers for the irregular shapes found in market responses.

use std::fmt;
use std::marker::PhantomData;
use serde::{
    Deserialize,
    de::{self, Deserializer, MapAccess, SeqAccess, Visitor},
};

/// Deserializes the values of a map in document order. The market sends an empty array instead
/// of an empty object for some maps, so sequences are accepted too.
pub fn map_values_or_seq<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    struct MapValuesVisitor<T> {
        marker: PhantomData<T>,
    }

    impl<'de, T> Visitor<'de> for MapValuesVisitor<T>
    where
        T: Deserialize<'de>,
    {
        type Value = Vec<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map or a sequence")
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut values = Vec::with_capacity(map.size_hint().unwrap_or(0));

            while let Some((_key, value)) = map.next_entry::<de::IgnoredAny, T>()? {
                values.push(value);
            }

            Ok(values)
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));

            while let Some(value) = seq.next_element::<T>()? {
                values.push(value);
            }

            Ok(values)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(MapValuesVisitor {
        marker: PhantomData,
    })
}

/// Deserializes a number that may be sent as a number, a numeric string, or null.
pub fn option_number_or_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(number)) => Ok(Some(number)),
        Some(NumberOrString::String(s)) => s.trim().parse::<u64>()
            .map(Some)
            .map_err(de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct Listings {
        #[serde(default, deserialize_with = "map_values_or_seq")]
        listinginfo: Vec<u64>,
    }

    #[derive(Deserialize, Debug)]
    struct Histogram {
        #[serde(default, deserialize_with = "option_number_or_string")]
        highest_buy_order: Option<u64>,
    }

    #[test]
    fn keeps_map_values_in_document_order() {
        let listings: Listings = serde_json::from_str(r#"{"listinginfo":{"9":3,"1":2,"5":1}}"#).unwrap();

        assert_eq!(listings.listinginfo, vec![3, 2, 1]);
    }

    #[test]
    fn accepts_empty_array_for_map() {
        let listings: Listings = serde_json::from_str(r#"{"listinginfo":[]}"#).unwrap();

        assert!(listings.listinginfo.is_empty());
    }

    #[test]
    fn accepts_null_and_missing_map() {
        let listings: Listings = serde_json::from_str(r#"{"listinginfo":null}"#).unwrap();

        assert!(listings.listinginfo.is_empty());

        let listings: Listings = serde_json::from_str("{}").unwrap();

        assert!(listings.listinginfo.is_empty());
    }

    #[test]
    fn deserializes_number_or_string() {
        let histogram: Histogram = serde_json::from_str(r#"{"highest_buy_order":"1523"}"#).unwrap();

        assert_eq!(histogram.highest_buy_order, Some(1523));

        let histogram: Histogram = serde_json::from_str(r#"{"highest_buy_order":1523}"#).unwrap();

        assert_eq!(histogram.highest_buy_order, Some(1523));

        let histogram: Histogram = serde_json::from_str(r#"{"highest_buy_order":null}"#).unwrap();

        assert_eq!(histogram.highest_buy_order, None);
    }

    #[test]
    fn rejects_non_numeric_string() {
        assert!(serde_json::from_str::<Histogram>(r#"{"highest_buy_order":"n/a"}"#).is_err());
    }
}
