//! Stub routing API and RFQ service for tests that go through the HTTP quoters

use std::collections::HashMap;

use axum::{
	extract::Query,
	http::StatusCode,
	routing::{get, post},
	Json, Router,
};
use tokio::task::JoinHandle;
use ur_types::serde_json::Value;
use ur_types::test_utils::TestQuotes;
use ur_types::{ClassicQuoteData, DutchLimitQuoteData};

/// Both backends on one ephemeral port, under `/routing` and `/rfq`
///
/// The routing API returns 99.90% of the input and the RFQ service 99.95%.
/// Only EXACT_INPUT is priced.
pub struct StubBackends {
	pub base_url: String,
	handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl StubBackends {
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let router = Router::new()
			.route("/routing/quote", get(classic_quote))
			.route("/rfq/quote", post(rfq_quote));

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, router).await;
		});

		Ok(Self {
			base_url: format!("http://{}", addr),
			handle,
		})
	}

	pub fn routing_endpoint(&self) -> String {
		format!("{}/routing", self.base_url)
	}

	pub fn rfq_endpoint(&self) -> String {
		format!("{}/rfq", self.base_url)
	}
}

impl Drop for StubBackends {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

async fn classic_quote(
	Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ClassicQuoteData>, StatusCode> {
	if params.get("type").map(String::as_str) != Some("exactIn") {
		return Err(StatusCode::NOT_FOUND);
	}
	let amount: u128 = params
		.get("amount")
		.and_then(|a| a.parse().ok())
		.ok_or(StatusCode::BAD_REQUEST)?;

	Ok(Json(TestQuotes::classic_data(amount, amount * 9_990 / 10_000)))
}

async fn rfq_quote(Json(body): Json<Value>) -> Result<Json<DutchLimitQuoteData>, StatusCode> {
	if body["type"] != "EXACT_INPUT" {
		return Err(StatusCode::NOT_FOUND);
	}
	let amount: u128 = body["amount"]
		.as_str()
		.and_then(|a| a.parse().ok())
		.ok_or(StatusCode::BAD_REQUEST)?;

	let mut data = TestQuotes::dutch_limit_data(amount, amount * 9_995 / 10_000);
	data.request_id = body["requestId"].as_str().unwrap_or_default().to_string();
	data.token_in = body["tokenIn"].as_str().unwrap_or_default().to_string();
	data.token_out = body["tokenOut"].as_str().unwrap_or_default().to_string();
	Ok(Json(data))
}
