use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::types::LogRecord;

pub const KNOWN_LOGS_URL: &str = "http://127.0.0.1:8000/api/logs/known";
pub const UNKNOWN_LOGS_URL: &str = "http://127.0.0.1:8000/api/logs/unknown";

/// Why a log fetch produced no data. The caller decides whether to
/// surface the reason or degrade to an empty collection.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed log payload: {0}")]
    Decode(String),
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        FetchError::Network(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

/// Fetches one log collection and decodes it into typed records.
pub async fn fetch_logs(url: &str) -> Result<Vec<LogRecord>, FetchError> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("window not available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url)).await?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::Network("fetch did not yield a response".to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    let json = JsFuture::from(resp.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|err| FetchError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_describe_their_cause() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "server responded with status 503"
        );
        assert_eq!(
            FetchError::Decode("missing field `timestamp`".to_string()).to_string(),
            "malformed log payload: missing field `timestamp`"
        );
    }
}
