//! HTTP API Client
//!
//! The single fetch helper used by every dashboard component. Failures are
//! written to the browser console and come back as `None`.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Default backend base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Local storage key overriding the base URL
const API_BASE_KEY: &str = "sentiment_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// GET `{base}/{endpoint}` and decode the JSON body
///
/// Non-2xx responses, network failures and malformed bodies are logged and
/// normalized to `None`. No retries.
pub async fn fetch_data<T: DeserializeOwned>(endpoint: &str) -> Option<T> {
    let url = format!("{}/{}", get_api_base(), endpoint.trim_start_matches('/'));

    let response = match Request::get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            log_error(&format!("Error fetching {}: {}", endpoint, e));
            return None;
        }
    };

    if !response.ok() {
        log_error(&format!(
            "HTTP Error: {} fetching {}",
            response.status(),
            endpoint
        ));
        return None;
    }

    match response.json::<T>().await {
        Ok(data) => Some(data),
        Err(e) => {
            log_error(&format!("Error decoding {}: {}", endpoint, e));
            None
        }
    }
}

fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}
