use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use ur_types::RoutingType;

use crate::state::AppState;

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
	pub status: String,
	pub version: String,
	/// Routing types with a registered quoter
	pub quoters: Vec<RoutingType>,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "ok".to_string(),
		version: env!("CARGO_PKG_VERSION").to_string(),
		quoters: state.quote_service.routing_types(),
	})
}
