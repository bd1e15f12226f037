use axum::{
	extract::{rejection::JsonRejection, State},
	response::Json,
};
use tracing::{info, warn};
use ur_types::{QuoteError, QuoteRequest, QuoteRequestBody, QuoteResponse, QuoteValidationError};

use crate::handlers::common::{quote_error_response, ApiError};
use crate::state::AppState;

/// POST /quote - Best quote across the requested mechanisms
pub async fn post_quote(
	State(state): State<AppState>,
	payload: Result<Json<QuoteRequestBody>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
	// Malformed bodies are validation failures, not axum's plain-text 422
	let Json(body) = payload.map_err(|rejection| {
		warn!("Rejected quote request body: {}", rejection.body_text());
		quote_error_response(&QuoteError::Validation(
			QuoteValidationError::MalformedBody {
				reason: rejection.body_text(),
			},
		))
	})?;

	let request = QuoteRequest::from_request_body(body).map_err(|e| {
		warn!("Invalid quote request: {}", e);
		quote_error_response(&QuoteError::Validation(e))
	})?;
	let request_id = request.request_id.clone();

	info!(
		"Received quote request {} ({} {}) with {} configs",
		request_id,
		request.trade_type,
		request.amount,
		request.configs().len()
	);

	let quote = state
		.quote_service
		.get_best_quote(request)
		.await
		.map_err(|e| {
			info!("Quote request {} failed: {}", request_id, e);
			quote_error_response(&e)
		})?;

	info!(
		"Returning {} quote for request {}",
		quote.routing_type(),
		request_id
	);
	Ok(Json(QuoteResponse::from_domain_quote(request_id, &quote)))
}
