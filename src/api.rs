// Simple fetch wrappers (WASM / browser)
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Headers, RequestCredentials, RequestInit, Response};

/// Every variant is surfaced to the user the same way (a blocking alert);
/// the split only keeps the message informative.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

pub async fn get_json<R: DeserializeOwned>(url: &str) -> Result<R, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let text = fetch_text(url, &opts).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Append one record. Any 2xx acknowledgment counts as success; the response
/// body is opaque and may be empty or non-JSON (a bare 201/204 is fine).
pub async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<serde_json::Value, ApiError> {
    let headers = Headers::new().map_err(|_| ApiError::Network("headers err".into()))?;
    headers
        .append("Content-Type", "application/json")
        .map_err(|_| ApiError::Network("header append err".into()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    // Cross-origin POST, cookies deliberately not sent.
    opts.set_credentials(RequestCredentials::Omit);
    let payload = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    opts.set_body(&JsValue::from_str(&payload));
    let text = fetch_text(url, &opts).await?;
    Ok(lenient_body(&text))
}

fn lenient_body(text: &str) -> serde_json::Value {
    serde_json::from_str(text).unwrap_or(serde_json::Value::Null)
}

async fn fetch_text(url: &str, opts: &RequestInit) -> Result<String, ApiError> {
    let window = window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let resp = JsFuture::from(window.fetch_with_str_and_init(url, opts))
        .await
        .map_err(|e| ApiError::Network(format!("fetch err {e:?}")))?;
    let response: Response = resp
        .dyn_into()
        .map_err(|_| ApiError::Network("not a response".into()))?;

    // Any non-2xx is a plain failure; no retry, no shape-specific handling.
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let text = JsFuture::from(
        response
            .text()
            .map_err(|_| ApiError::Network("no text".into()))?,
    )
    .await
    .map_err(|_| ApiError::Network("text err".into()))?;
    text.as_string()
        .ok_or_else(|| ApiError::Decode("no string".into()))
}

#[cfg(test)]
mod tests {
    use super::lenient_body;

    #[test]
    fn empty_acknowledgment_body_is_not_an_error() {
        assert_eq!(lenient_body(""), serde_json::Value::Null);
        assert_eq!(lenient_body("Created"), serde_json::Value::Null);
    }

    #[test]
    fn json_acknowledgment_body_is_passed_through() {
        assert_eq!(lenient_body(r#"{"id":7}"#), serde_json::json!({ "id": 7 }));
    }
}
