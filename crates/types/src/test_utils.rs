//! Test utilities for creating common test objects
//!
//! Builders and canned quotes shared by the unit and integration tests of the
//! workspace crates.

use async_trait::async_trait;

use crate::models::{Token, TradeType, U256};
use crate::quoters::{Quoter, QuoterError, QuoterResult};
use crate::quotes::{
	ClassicQuote, ClassicQuoteData, DutchLimitQuote, DutchLimitQuoteData, Quote, QuoteRequest,
};
use crate::routing::{ClassicConfig, DutchLimitConfig, RoutingConfig, RoutingType};

/// Offerer used across fixtures
pub const TEST_OFFERER: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

/// Builder for creating test QuoteRequest objects with sensible defaults
#[derive(Debug, Clone)]
pub struct QuoteRequestBuilder {
	token_in_chain_id: u64,
	token_out_chain_id: u64,
	request_id: String,
	token_in: String,
	token_out: String,
	amount: U256,
	trade_type: TradeType,
	slippage_tolerance: Option<String>,
	configs: Vec<RoutingConfig>,
}

impl Default for QuoteRequestBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl QuoteRequestBuilder {
	/// USDC -> USDT on mainnet, 10k USDC exact input, no configs
	pub fn new() -> Self {
		Self {
			token_in_chain_id: 1,
			token_out_chain_id: 1,
			request_id: "test-request".to_string(),
			token_in: Token::usdc_mainnet().address,
			token_out: Token::usdt_mainnet().address,
			amount: U256::from(10_000_000_000u64),
			trade_type: TradeType::ExactInput,
			slippage_tolerance: None,
			configs: Vec::new(),
		}
	}

	pub fn request_id(mut self, request_id: &str) -> Self {
		self.request_id = request_id.to_string();
		self
	}

	pub fn tokens(mut self, token_in: &str, token_out: &str) -> Self {
		self.token_in = token_in.to_string();
		self.token_out = token_out.to_string();
		self
	}

	pub fn chains(mut self, token_in_chain_id: u64, token_out_chain_id: u64) -> Self {
		self.token_in_chain_id = token_in_chain_id;
		self.token_out_chain_id = token_out_chain_id;
		self
	}

	pub fn amount(mut self, amount: u128) -> Self {
		self.amount = U256::from(amount);
		self
	}

	pub fn trade_type(mut self, trade_type: TradeType) -> Self {
		self.trade_type = trade_type;
		self
	}

	pub fn slippage_tolerance(mut self, slippage: &str) -> Self {
		self.slippage_tolerance = Some(slippage.to_string());
		self
	}

	/// Append a classic config
	pub fn classic(mut self) -> Self {
		self.configs.push(RoutingConfig::Classic(ClassicConfig));
		self
	}

	/// Append a dutch-limit config with default periods
	pub fn dutch_limit(mut self) -> Self {
		self.configs
			.push(RoutingConfig::DutchLimit(DutchLimitConfig::new(TEST_OFFERER)));
		self
	}

	pub fn config(mut self, config: RoutingConfig) -> Self {
		self.configs.push(config);
		self
	}

	pub fn build(self) -> QuoteRequest {
		QuoteRequest::new(
			self.token_in_chain_id,
			self.token_out_chain_id,
			self.request_id,
			self.token_in,
			self.token_out,
			self.amount,
			self.trade_type,
			self.configs,
			self.slippage_tolerance,
		)
	}
}

/// Canned quotes for filter and selector tests
pub struct TestQuotes;

impl TestQuotes {
	/// Routing engine payload between USDC and USDT
	pub fn classic_data(amount: u128, quote: u128) -> ClassicQuoteData {
		ClassicQuoteData {
			quote_id: "test-quote".to_string(),
			amount: U256::from(amount),
			amount_decimals: amount.to_string(),
			quote: U256::from(quote),
			quote_decimals: quote.to_string(),
			quote_gas_adjusted: quote.to_string(),
			quote_gas_adjusted_decimals: quote.to_string(),
			gas_use_estimate: "100000".to_string(),
			gas_use_estimate_quote: "0".to_string(),
			gas_use_estimate_quote_decimals: "0".to_string(),
			gas_use_estimate_usd: "0".to_string(),
			simulation_error: None,
			simulation_status: "UNATTEMPTED".to_string(),
			gas_price_wei: "1000000000".to_string(),
			block_number: "1".to_string(),
			route: Vec::new(),
			route_string: "[V3] 0.01% = USDC -- USDT".to_string(),
			method_parameters: None,
			extra: Default::default(),
		}
	}

	pub fn classic_exact_input(amount_in: u128, amount_out: u128) -> Quote {
		ClassicQuote::from_response_body(
			Self::classic_data(amount_in, amount_out),
			TradeType::ExactInput,
		)
		.into()
	}

	pub fn classic_exact_output(amount_in: u128, amount_out: u128) -> Quote {
		ClassicQuote::from_response_body(
			Self::classic_data(amount_out, amount_in),
			TradeType::ExactOutput,
		)
		.into()
	}

	pub fn dutch_limit_data(amount_in: u128, amount_out: u128) -> DutchLimitQuoteData {
		DutchLimitQuoteData {
			chain_id: 1,
			request_id: "test-request".to_string(),
			token_in: Token::usdc_mainnet().address,
			amount_in: U256::from(amount_in),
			token_out: Token::usdt_mainnet().address,
			amount_out: U256::from(amount_out),
			offerer: TEST_OFFERER.to_string(),
			filler: None,
		}
	}

	pub fn dutch_limit(amount_in: u128, amount_out: u128) -> Quote {
		Self::dutch_limit_with_config(DutchLimitConfig::new(TEST_OFFERER), amount_in, amount_out)
	}

	pub fn dutch_limit_with_config(
		config: DutchLimitConfig,
		amount_in: u128,
		amount_out: u128,
	) -> Quote {
		DutchLimitQuote::from_response_body_and_config(
			config,
			Self::dutch_limit_data(amount_in, amount_out),
		)
		.into()
	}
}

/// Outcome a [`StaticQuoter`] replays on every call
#[derive(Debug, Clone)]
pub enum StaticOutcome {
	Quote(Quote),
	NoQuote,
	Fail(String),
}

/// Quoter returning a fixed outcome without any network access
#[derive(Debug, Clone)]
pub struct StaticQuoter {
	id: String,
	routing_type: RoutingType,
	outcome: StaticOutcome,
}

impl StaticQuoter {
	pub fn new(routing_type: RoutingType, outcome: StaticOutcome) -> Self {
		Self {
			id: format!("static-{}", routing_type),
			routing_type,
			outcome,
		}
	}

	pub fn quoting(quote: Quote) -> Self {
		Self::new(quote.routing_type(), StaticOutcome::Quote(quote))
	}

	pub fn failing(routing_type: RoutingType, reason: &str) -> Self {
		Self::new(routing_type, StaticOutcome::Fail(reason.to_string()))
	}
}

#[async_trait]
impl Quoter for StaticQuoter {
	fn routing_type(&self) -> RoutingType {
		self.routing_type
	}

	fn id(&self) -> &str {
		&self.id
	}

	async fn quote(
		&self,
		_request: &QuoteRequest,
		_config: &RoutingConfig,
	) -> QuoterResult<Option<Quote>> {
		match &self.outcome {
			StaticOutcome::Quote(quote) => Ok(Some(quote.clone())),
			StaticOutcome::NoQuote => Ok(None),
			StaticOutcome::Fail(reason) => Err(QuoterError::InvalidResponse {
				reason: reason.clone(),
			}),
		}
	}
}
