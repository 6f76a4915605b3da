//! Enumerated types.

mod currency;
mod language;

pub use currency::Currency;
pub use language::Language;
