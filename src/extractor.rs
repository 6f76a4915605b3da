//! Extraction of scalar values from HTML pages and fragments.
//!
//! The market embeds some values only in HTML, such as the item name ID in a script on the
//! listings page and the number of buy orders in the order summary. Each value is a [`Field`]
//! mapped to a pattern whose first capture group is the value. If the market changes its page
//! layout, the pattern for a field can be replaced with [`FieldExtractor::with_pattern`].

use crate::error::ParseHtmlError;
use std::collections::HashMap;
use std::str::FromStr;
use lazy_regex::{regex, Regex};
use strum_macros::Display;

/// A named value extracted from HTML.
#[derive(Debug, Display, PartialEq, Eq, Hash, Clone, Copy)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    /// The item name ID from the `Market_LoadOrderSpread(<id>)` call on the listings page.
    ItemNameId,
    /// The number of buy orders from the histogram's `buy_order_summary`.
    WantedCount,
}

impl Field {
    /// The built-in pattern for this field.
    pub fn default_pattern(&self) -> Regex {
        match self {
            Self::ItemNameId => Regex::clone(regex!(r#"Market_LoadOrderSpread\(\s*(\d+)\s*\)"#)),
            Self::WantedCount => Regex::clone(regex!(r#"<span\s*class="market_commodity_orders_header_promote">([\d,]+)</span>"#)),
        }
    }
}

/// Extracts [`Field`] values from text.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    patterns: HashMap<Field, Regex>,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        let patterns = [Field::ItemNameId, Field::WantedCount]
            .into_iter()
            .map(|field| (field, field.default_pattern()))
            .collect();

        Self {
            patterns,
        }
    }
}

impl FieldExtractor {
    /// Replaces the pattern for a field. The first capture group of the pattern is the value.
    pub fn with_pattern(mut self, field: Field, pattern: Regex) -> Self {
        self.patterns.insert(field, pattern);
        self
    }

    /// Extracts the first match for `field` from `text`.
    pub fn extract<'a>(
        &self,
        field: Field,
        text: &'a str,
    ) -> Result<&'a str, ParseHtmlError> {
        self.patterns
            .get(&field)
            .and_then(|pattern| pattern.captures(text))
            .and_then(|captures| captures.get(1))
            .map(|capture| capture.as_str())
            .ok_or(ParseHtmlError::MissingField(field))
    }

    /// Extracts the first match for `field` from `text` and parses it. Thousands separators are
    /// removed before parsing.
    pub fn extract_parsed<T>(
        &self,
        field: Field,
        text: &str,
    ) -> Result<T, ParseHtmlError>
    where
        T: FromStr,
    {
        let value = self.extract(field, text)?;

        value.replace(',', "").parse::<T>()
            .map_err(|_| ParseHtmlError::InvalidValue {
                field,
                value: value.to_string(),
            })
    }
}
