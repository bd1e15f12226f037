//! Classic quoter backed by the AMM routing API

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use ur_types::{
	ClassicQuote, ClassicQuoteData, Quote, QuoteRequest, Quoter, QuoterError, QuoterResult,
	RoutingConfig, RoutingType, TradeType,
};

use crate::client::{build_client, build_url, map_send_error, read_quote_body};

/// Quoter for classic routes
///
/// Issues `GET {endpoint}/quote` and passes the routing engine's response
/// through as a [`ClassicQuote`].
#[derive(Debug, Clone)]
pub struct ClassicQuoter {
	id: String,
	endpoint: String,
	timeout_ms: u64,
	client: Client,
}

impl ClassicQuoter {
	pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> QuoterResult<Self> {
		let endpoint = endpoint.into();
		// fail at startup rather than on the first request
		build_url(&endpoint, "quote")?;

		Ok(Self {
			id: "routing-api".to_string(),
			endpoint,
			timeout_ms,
			client: build_client(timeout_ms)?,
		})
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	fn trade_type_param(trade_type: TradeType) -> &'static str {
		match trade_type {
			TradeType::ExactInput => "exactIn",
			TradeType::ExactOutput => "exactOut",
		}
	}
}

#[async_trait]
impl Quoter for ClassicQuoter {
	fn routing_type(&self) -> RoutingType {
		RoutingType::Classic
	}

	fn id(&self) -> &str {
		&self.id
	}

	async fn quote(
		&self,
		request: &QuoteRequest,
		config: &RoutingConfig,
	) -> QuoterResult<Option<Quote>> {
		if config.routing_type() != RoutingType::Classic {
			return Err(QuoterError::UnsupportedConfig {
				quoter_id: self.id.clone(),
				routing_type: config.routing_type(),
			});
		}

		let mut url = build_url(&self.endpoint, "quote")?;
		{
			let mut query = url.query_pairs_mut();
			query
				.append_pair("tokenInAddress", &request.token_in)
				.append_pair("tokenInChainId", &request.token_in_chain_id.to_string())
				.append_pair("tokenOutAddress", &request.token_out)
				.append_pair("tokenOutChainId", &request.token_out_chain_id.to_string())
				.append_pair("amount", &request.amount.to_string())
				.append_pair("type", Self::trade_type_param(request.trade_type));
			if let Some(slippage) = &request.slippage_tolerance {
				query.append_pair("slippageTolerance", slippage);
			}
		}

		debug!(
			"Requesting classic quote {} from {}",
			request.request_id, self.endpoint
		);

		let response = self
			.client
			.get(url)
			.send()
			.await
			.map_err(|e| map_send_error(e, self.timeout_ms))?;

		let body: Option<ClassicQuoteData> = read_quote_body(response, &self.id).await?;
		Ok(body.map(|data| ClassicQuote::from_response_body(data, request.trade_type).into()))
	}
}
