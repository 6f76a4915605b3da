//! Error types.

use crate::extractor::Field;
use reqwest::StatusCode;

/// Any error from this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Any number of errors that can occur when making requests to the market.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An invalid parameter was supplied.
    #[error("Invalid parameter: {}", .0)]
    Parameter(#[from] ParameterError),
    /// The response was a page we recognize but could not use, such as an error page.
    #[error("Unexpected response: {}", .0)]
    Response(String),
    /// An error from the underlying request.
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    /// An error from the request middleware.
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    /// The response body could not be parsed as JSON.
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    /// A non-success HTTP status.
    #[error("Error {}", .0)]
    Http(StatusCode),
    /// The market responded with HTTP 429. Back off before retrying.
    #[error("Rate limited")]
    RateLimited,
    /// Not logged in, either because no session ID was set or because the request was redirected
    /// to the login page.
    #[error("Not logged in")]
    NotLoggedIn,
    /// A value could not be extracted from an HTML fragment.
    #[error("Error parsing HTML document: {}", .0)]
    Html(#[from] ParseHtmlError),
    /// A field required to build the result was missing or null.
    #[error("Missing data in response: {}", .0)]
    MissingData(&'static str),
    /// The operation is declared but not supported yet.
    #[error("Operation not supported: {}", .0)]
    Unsupported(&'static str),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

/// An error with a parameter used to configure a client.
#[derive(thiserror::Error, Debug)]
pub enum ParameterError {
    /// The proxy could not be used.
    #[error("Invalid proxy: {}", .0)]
    Proxy(reqwest::Error),
    /// A configured header name is not valid.
    #[error("{}", .0)]
    InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),
    /// A configured header value is not valid.
    #[error("{}", .0)]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
    /// The base URL cannot have path segments appended to it.
    #[error("URL cannot be used as a base: {}", .0)]
    CannotBeABase(String),
}

/// An error occurred when setting cookies.
#[derive(thiserror::Error, Debug)]
pub enum SetCookiesError {
    /// The cookies did not include a `sessionid` cookie.
    #[error("Missing sessionid in cookies")]
    MissingSessionID,
}

/// An error extracting a value from an HTML page or fragment.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseHtmlError {
    /// The pattern for the field did not match.
    #[error("No match for {}", .0)]
    MissingField(Field),
    /// The pattern matched but the captured value could not be parsed.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// The field.
        field: Field,
        /// The captured text.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_is_not_missing_data() {
        let error = Error::RateLimited;

        assert!(!matches!(error, Error::MissingData(_)));
        assert_eq!(error.to_string(), "Rate limited");
    }

    #[test]
    fn html_error_converts() {
        let error: Error = ParseHtmlError::MissingField(Field::ItemNameId).into();

        assert!(matches!(error, Error::Html(ParseHtmlError::MissingField(Field::ItemNameId))));
    }
}
