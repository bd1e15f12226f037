//! Dutch-limit quoter backed by the Gouda RFQ service

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;
use ur_types::{
	DutchLimitQuote, DutchLimitQuoteData, Quote, QuoteRequest, Quoter, QuoterError,
	QuoterResult, RoutingConfig, RoutingType,
};

use crate::client::{build_client, build_url, map_send_error, read_quote_body};

/// Request body understood by the RFQ service
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct RfqQuoteRequest<'a> {
	request_id: &'a str,
	token_in_chain_id: u64,
	token_out_chain_id: u64,
	token_in: &'a str,
	token_out: &'a str,
	amount: String,
	#[serde(rename = "type")]
	trade_type: &'static str,
	offerer: &'a str,
}

/// Quoter for dutch-limit orders
///
/// Issues `POST {endpoint}/quote` and attaches the originating config to the
/// filler's response.
#[derive(Debug, Clone)]
pub struct DutchLimitQuoter {
	id: String,
	endpoint: String,
	timeout_ms: u64,
	client: Client,
}

impl DutchLimitQuoter {
	pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> QuoterResult<Self> {
		let endpoint = endpoint.into();
		build_url(&endpoint, "quote")?;

		Ok(Self {
			id: "gouda-rfq".to_string(),
			endpoint,
			timeout_ms,
			client: build_client(timeout_ms)?,
		})
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

#[async_trait]
impl Quoter for DutchLimitQuoter {
	fn routing_type(&self) -> RoutingType {
		RoutingType::DutchLimit
	}

	fn id(&self) -> &str {
		&self.id
	}

	async fn quote(
		&self,
		request: &QuoteRequest,
		config: &RoutingConfig,
	) -> QuoterResult<Option<Quote>> {
		let Some(config) = config.as_dutch_limit() else {
			return Err(QuoterError::UnsupportedConfig {
				quoter_id: self.id.clone(),
				routing_type: config.routing_type(),
			});
		};

		let url = build_url(&self.endpoint, "quote")?;
		let body = RfqQuoteRequest {
			request_id: &request.request_id,
			token_in_chain_id: request.token_in_chain_id,
			token_out_chain_id: request.token_out_chain_id,
			token_in: &request.token_in,
			token_out: &request.token_out,
			amount: request.amount.to_string(),
			trade_type: request.trade_type.as_str(),
			offerer: &config.offerer,
		};

		debug!(
			"Requesting dutch-limit quote {} from {} for offerer {}",
			request.request_id, self.endpoint, config.offerer
		);

		let response = self
			.client
			.post(url)
			.json(&body)
			.send()
			.await
			.map_err(|e| map_send_error(e, self.timeout_ms))?;

		let data: Option<DutchLimitQuoteData> = read_quote_body(response, &self.id).await?;
		Ok(data.map(|data| {
			DutchLimitQuote::from_response_body_and_config(config.clone(), data).into()
		}))
	}
}
