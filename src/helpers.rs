use crate::config::TransportConfig;
use crate::error::{Error, ParameterError};
use crate::types::HttpClient;
use std::sync::Arc;
use bytes::Bytes;
use lazy_regex::{regex_captures, regex_is_match};
use reqwest::cookie::Jar;
use reqwest::header;
use reqwest::StatusCode;
use reqwest_middleware::ClientBuilder;
use serde::de::DeserializeOwned;

pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Builds a client. Requests made with it are never retried.
pub fn get_default_client(
    cookies: Option<Arc<Jar>>,
    user_agent: &'static str,
    transport: &TransportConfig,
) -> Result<HttpClient, Error> {
    let mut headers = header::HeaderMap::new();

    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent));

    for (name, value) in &transport.headers {
        let name = header::HeaderName::from_bytes(name.as_bytes())
            .map_err(ParameterError::from)?;
        let value = header::HeaderValue::from_str(value)
            .map_err(ParameterError::from)?;

        headers.insert(name, value);
    }

    let mut builder = reqwest::ClientBuilder::new()
        .default_headers(headers);

    if let Some(cookies) = cookies {
        builder = builder.cookie_provider(cookies);
    }

    if let Some(timeout) = transport.timeout() {
        builder = builder.timeout(timeout);
    }

    if let Some(proxy) = &transport.proxy {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(ParameterError::Proxy)?;

        builder = builder.proxy(proxy);
    }

    Ok(ClientBuilder::new(builder.build()?).build())
}

/// Gets the `sessionid` value from a list of cookie strings.
pub fn get_sessionid_from_cookies(cookies: &[String]) -> Option<String> {
    cookies
        .iter()
        .find_map(|cookie| regex_captures!(r#"^\s*sessionid=([^;]+)"#, cookie))
        .map(|(_, sessionid)| sessionid.trim().to_string())
}

fn is_login(location_option: Option<&header::HeaderValue>) -> bool {
    match location_option {
        Some(location) => {
            if let Ok(location_str) = location.to_str() {
                regex_is_match!("/login", location_str)
            } else {
                false
            }
        },
        None => false,
    }
}

/// Maps a response status to an error. HTTP 429 is always [`Error::RateLimited`].
pub fn check_status(
    status: StatusCode,
    location: Option<&header::HeaderValue>,
) -> Result<(), Error> {
    match status.as_u16() {
        300..=399 if is_login(location) => Err(Error::NotLoggedIn),
        429 => Err(Error::RateLimited),
        400..=599 => Err(Error::Http(status)),
        _ => Ok(()),
    }
}

/// Checks the status of the response and reads its body.
pub async fn check_response(response: reqwest::Response) -> Result<Bytes, Error> {
    let status = response.status();

    if let Err(error) = check_status(status, response.headers().get(header::LOCATION)) {
        if let Error::RateLimited = error {
            log::warn!("Rate limited on {}", response.url());
        } else {
            log::debug!("Request to {} failed with {status}", response.url());
        }

        return Err(error);
    }

    Ok(response.bytes().await?)
}

/// Checks the status of the response and reads its body as text.
pub async fn text_response(response: reqwest::Response) -> Result<String, Error> {
    let body = check_response(response).await?;

    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Checks the status of the response and deserializes its body as JSON.
pub async fn parses_response<D>(response: reqwest::Response) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let body = check_response(response).await?;

    parses_body(&body)
}

pub fn parses_body<D>(body: &[u8]) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    match serde_json::from_slice::<D>(body) {
        Ok(body) => Ok(body),
        Err(parse_error) => {
            // unexpected response
            let html = String::from_utf8_lossy(body);

            if regex_is_match!(r#"<h1>Sorry!</h1>"#, &html) {
                if let Some((_, message)) = regex_captures!("<h3>(.+)</h3>", &html) {
                    Err(Error::Response(message.into()))
                } else {
                    Err(Error::Response("Unexpected error".into()))
                }
            } else if regex_is_match!(r#"<h1>Sign In</h1>"#, &html) && regex_is_match!(r#"g_steamID = false;"#, &html) {
                Err(Error::NotLoggedIn)
            } else {
                Err(Error::Parse(parse_error))
            }
        }
    }
}
