//! Items API
//!
//! HTTP bindings for the items endpoint.

use crate::models::Item;

/// Endpoint the item list is fetched from.
pub const ITEMS_URL: &str = "http://localhost:5000/api/items";

/// GET the item list. Network errors, non-2xx statuses and malformed
/// bodies all collapse into a single `Err` carrying the cause.
pub async fn fetch_items() -> Result<Vec<Item>, String> {
    let response = reqwest::get(ITEMS_URL).await.map_err(|e| e.to_string())?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("server returned {}", status));
    }
    let body = response.text().await.map_err(|e| e.to_string())?;
    parse_items(&body)
}

/// Interpret a response body as a sequence of items. A body that is not a
/// JSON array of records carrying `id` and `name` counts as a failed fetch.
pub fn parse_items(body: &str) -> Result<Vec<Item>, String> {
    serde_json::from_str(body).map_err(|e| e.to_string())
}
