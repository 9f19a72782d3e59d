//! Remote document retrieval

use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::logging::{redaction::redact_url, timing::Timer};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Download a document, accepting only a `200 OK` answer
pub async fn fetch_document(url: &Url, config: &FetchConfig) -> Result<Vec<u8>> {
    let shown = redact_url(url.as_str());
    let _timer = Timer::with_details("fetch_document", &shown);
    info!(url = %shown, timeout = config.timeout, "Fetching document");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .user_agent(config.user_agent.as_str())
        .build()?;

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify(e, config.timeout))?;

    let status = response.status();
    if status != StatusCode::OK {
        debug!(url = %shown, status = status.as_u16(), "Unexpected status");
        return Err(Error::HttpStatus {
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| classify(e, config.timeout))?;
    debug!(url = %shown, bytes = body.len(), "Fetched document");
    Ok(body.to_vec())
}

fn classify(error: reqwest::Error, seconds: u64) -> Error {
    if error.is_timeout() {
        Error::Timeout { seconds }
    } else {
        error.into()
    }
}
