use super::response::{GetInventoryResponse, SellItemResponse};
use crate::error::Error;
use crate::helpers::{parses_body, parses_response};
use crate::response::InventoryEntry;
use reqwest::StatusCode;
use serde_json::Value;

/// Private inventories come back as `null`.
pub fn inventory_entries(body: Option<GetInventoryResponse>) -> Vec<InventoryEntry> {
    body
        .map(GetInventoryResponse::into_entries)
        .unwrap_or_default()
}

/// Reads an inventory response. Private inventories are answered with a 403 and a `null` body,
/// which gives an empty list.
pub async fn inventory_response(response: reqwest::Response) -> Result<Vec<InventoryEntry>, Error> {
    let status = response.status();

    if status == StatusCode::FORBIDDEN {
        let body = response.bytes().await?;

        return match std::str::from_utf8(&body).map(str::trim) {
            Ok("" | "null") => {
                log::debug!("Inventory is private");
                Ok(Vec::new())
            },
            _ => Err(Error::Http(status)),
        };
    }

    let body: Option<GetInventoryResponse> = parses_response(response).await?;

    Ok(inventory_entries(body))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Interprets the body of a sell response. An empty or falsy body is an unsuccessful sale.
pub fn sell_result(body: &[u8]) -> Result<bool, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(false);
    }

    let value: Value = parses_body(body)?;

    if is_falsy(&value) {
        return Ok(false);
    }

    let response: SellItemResponse = serde_json::from_value(value)?;
    let success = response.success
        .ok_or(Error::MissingData("success"))?;

    if !success {
        log::debug!("Sale unsuccessful: {}", response.message.as_deref().unwrap_or("no message"));
    }

    Ok(success)
}
