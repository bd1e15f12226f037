//! HTTP client helpers shared by the quoters

use std::time::Duration;

use reqwest::{
	header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
	Client, Response, StatusCode,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use ur_types::{QuoterError, QuoterResult};
use url::Url;

const SERVICE_USER_AGENT: &str = concat!("unified-routing/", env!("CARGO_PKG_VERSION"));

/// Build a client with the quoter's timeout and default headers
pub fn build_client(timeout_ms: u64) -> QuoterResult<Client> {
	let mut headers = HeaderMap::new();
	headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
	headers.insert(USER_AGENT, HeaderValue::from_static(SERVICE_USER_AGENT));

	Client::builder()
		.default_headers(headers)
		.timeout(Duration::from_millis(timeout_ms))
		.build()
		.map_err(QuoterError::HttpError)
}

/// Join a path onto a base endpoint, keeping any path the endpoint already has
pub fn build_url(base_url: &str, path: &str) -> QuoterResult<Url> {
	let mut base = Url::parse(base_url).map_err(|e| QuoterError::ConfigError {
		reason: format!("Invalid base URL '{}': {}", base_url, e),
	})?;

	// Treat the base as a directory so `join` appends instead of replacing
	if !base.path().ends_with('/') {
		base.set_path(&format!("{}/", base.path()));
	}

	base.join(path).map_err(|e| QuoterError::ConfigError {
		reason: format!(
			"Failed to join URL path '{}' to base '{}': {}",
			path, base_url, e
		),
	})
}

/// Map a transport failure, surfacing client timeouts as such
pub(crate) fn map_send_error(error: reqwest::Error, timeout_ms: u64) -> QuoterError {
	if error.is_timeout() {
		QuoterError::Timeout { timeout_ms }
	} else {
		QuoterError::HttpError(error)
	}
}

/// Decode a backend response; 404 means the backend has no quote
pub(crate) async fn read_quote_body<T: DeserializeOwned>(
	response: Response,
	quoter_id: &str,
) -> QuoterResult<Option<T>> {
	let status = response.status();
	if status == StatusCode::NOT_FOUND {
		debug!("Quoter {} has no quote (404)", quoter_id);
		return Ok(None);
	}

	let body = response.text().await.map_err(QuoterError::HttpError)?;
	if !status.is_success() {
		return Err(QuoterError::HttpStatusError {
			status_code: status.as_u16(),
			reason: body,
		});
	}

	debug!(
		"Quoter {} responded successfully with {} bytes",
		quoter_id,
		body.len()
	);

	serde_json::from_str(&body)
		.map(Some)
		.map_err(|e| QuoterError::InvalidResponse {
			reason: format!("Failed to parse {} quote response: {}", quoter_id, e),
		})
}
