use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use ur_types::QuoteError;

/// Error response format shared by handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
	pub detail: String,
	pub error_code: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl ErrorResponse {
	pub fn new(detail: impl Into<String>, error_code: impl Into<String>) -> Self {
		Self {
			detail: detail.into(),
			error_code: error_code.into(),
		}
	}
}

/// Map a domain error onto its HTTP status and body
pub fn quote_error_response(error: &QuoteError) -> ApiError {
	let status = match error {
		QuoteError::Validation(_) => StatusCode::BAD_REQUEST,
		QuoteError::NoQuotesAvailable => StatusCode::NOT_FOUND,
	};
	(
		status,
		Json(ErrorResponse::new(error.to_string(), error.error_code())),
	)
}
