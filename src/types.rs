//! Types for common values in market requests and responses.

/// Uniquely identifies an application on Steam. For example: 570 for Dota 2.
pub type AppId = u32;
/// A context ID belonging to an [`AppId`]. Most games keep tradable items in context `2`.
pub type ContextId = u64;
/// A price in the smallest unit of the configured currency, e.g. cents.
pub type Price = u64;

// Types internally used by the crate.
use reqwest_middleware::ClientWithMiddleware;

pub(crate) type HttpClient = ClientWithMiddleware;
