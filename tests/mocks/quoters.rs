//! Quoters that price off the request without any network access

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use ur_types::test_utils::TestQuotes;
use ur_types::{
	ClassicQuote, DutchLimitQuote, DutchLimitQuoteData, Quote, QuoteRequest, Quoter,
	QuoterError, QuoterResult, RoutingConfig, RoutingType, TradeType, U256,
};

/// Quotes a fixed rate against the requested amount
///
/// `rate_bps` is output per input in basis points: at 9_990 an EXACT_INPUT
/// request gets 99.9% of its amount out, and an EXACT_OUTPUT request is asked
/// for `amount * 10_000 / 9_990` in.
#[derive(Debug, Clone)]
pub struct RateQuoter {
	routing_type: RoutingType,
	rate_bps: u128,
	calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl RateQuoter {
	pub fn classic(rate_bps: u128) -> Self {
		Self::new(RoutingType::Classic, rate_bps)
	}

	pub fn dutch_limit(rate_bps: u128) -> Self {
		Self::new(RoutingType::DutchLimit, rate_bps)
	}

	fn new(routing_type: RoutingType, rate_bps: u128) -> Self {
		Self {
			routing_type,
			rate_bps,
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Shared counter of `quote` invocations
	pub fn calls(&self) -> Arc<AtomicUsize> {
		Arc::clone(&self.calls)
	}

	fn amounts(&self, request: &QuoteRequest) -> (u128, u128) {
		let amount = request.amount.to_u128().unwrap_or(u128::MAX / 10_000);
		match request.trade_type {
			TradeType::ExactInput => (amount, amount * self.rate_bps / 10_000),
			TradeType::ExactOutput => (amount * 10_000 / self.rate_bps, amount),
		}
	}
}

#[async_trait]
impl Quoter for RateQuoter {
	fn routing_type(&self) -> RoutingType {
		self.routing_type
	}

	fn id(&self) -> &str {
		match self.routing_type {
			RoutingType::Classic => "rate-classic",
			RoutingType::DutchLimit => "rate-dutch-limit",
		}
	}

	async fn quote(
		&self,
		request: &QuoteRequest,
		config: &RoutingConfig,
	) -> QuoterResult<Option<Quote>> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		let (amount_in, amount_out) = self.amounts(request);

		let quote = match config {
			RoutingConfig::Classic(_) => {
				let data = match request.trade_type {
					TradeType::ExactInput => TestQuotes::classic_data(amount_in, amount_out),
					TradeType::ExactOutput => TestQuotes::classic_data(amount_out, amount_in),
				};
				ClassicQuote::from_response_body(data, request.trade_type).into()
			},
			RoutingConfig::DutchLimit(config) => DutchLimitQuote::from_response_body_and_config(
				config.clone(),
				DutchLimitQuoteData {
					chain_id: request.token_in_chain_id,
					request_id: request.request_id.clone(),
					token_in: request.token_in.clone(),
					amount_in: U256::from(amount_in),
					token_out: request.token_out.clone(),
					amount_out: U256::from(amount_out),
					offerer: config.offerer.clone(),
					filler: None,
				},
			)
			.into(),
		};
		Ok(Some(quote))
	}
}

/// Quoter whose backend is always down
#[derive(Debug, Clone)]
pub struct FailingQuoter {
	routing_type: RoutingType,
}

#[allow(dead_code)]
impl FailingQuoter {
	pub fn new(routing_type: RoutingType) -> Self {
		Self { routing_type }
	}
}

#[async_trait]
impl Quoter for FailingQuoter {
	fn routing_type(&self) -> RoutingType {
		self.routing_type
	}

	fn id(&self) -> &str {
		"failing"
	}

	async fn quote(
		&self,
		_request: &QuoteRequest,
		_config: &RoutingConfig,
	) -> QuoterResult<Option<Quote>> {
		Err(QuoterError::HttpStatusError {
			status_code: 503,
			reason: "upstream unavailable".to_string(),
		})
	}
}
