//! API request fixtures for e2e and integration tests

use ur_types::serde_json::{json, Value};
use ur_types::test_utils::TEST_OFFERER;

/// API test data fixtures
#[allow(dead_code)]
pub struct ApiFixtures;

#[allow(dead_code)]
impl ApiFixtures {
	pub const USDC: &'static str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
	pub const USDT: &'static str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

	/// 10,000 USDC in base units
	pub const LARGE_AMOUNT: &'static str = "10000000000";
	/// 10 USDC in base units
	pub const TINY_AMOUNT: &'static str = "10000000";

	/// USDC -> USDT request with the given trade type and configs
	pub fn quote_request_with_type(amount: &str, trade_type: &str, configs: Value) -> Value {
		json!({
			"tokenInChainId": 1,
			"tokenOutChainId": 1,
			"requestId": "e2e-request",
			"tokenIn": Self::USDC,
			"tokenOut": Self::USDT,
			"amount": amount,
			"type": trade_type,
			"slippageTolerance": "0.5",
			"configs": configs
		})
	}

	pub fn quote_request(amount: &str, configs: Value) -> Value {
		Self::quote_request_with_type(amount, "EXACT_INPUT", configs)
	}

	pub fn classic_config() -> Value {
		json!({ "routingType": "classic" })
	}

	pub fn dutch_limit_config() -> Value {
		json!({ "routingType": "dutch-limit", "offerer": TEST_OFFERER })
	}

	pub fn dutch_limit_config_with_periods(exclusive: i64, auction: i64) -> Value {
		json!({
			"routingType": "dutch-limit",
			"offerer": TEST_OFFERER,
			"exclusivePeriodSecs": exclusive,
			"auctionPeriodSecs": auction
		})
	}
}
