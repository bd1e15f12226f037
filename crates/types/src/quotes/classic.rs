//! Classic (AMM routing engine) quotes

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{TradeType, U256};

/// Token as it appears inside a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInRoute {
	pub address: String,
	pub chain_id: u64,
	pub symbol: String,
	pub decimals: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2Reserve {
	pub token: TokenInRoute,
	pub quotient: String,
}

/// Pool hop within a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PoolInRoute {
	#[serde(rename = "v2-pool", rename_all = "camelCase")]
	V2 {
		address: String,
		token_in: TokenInRoute,
		token_out: TokenInRoute,
		reserve0: V2Reserve,
		reserve1: V2Reserve,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		amount_in: Option<String>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		amount_out: Option<String>,
	},
	#[serde(rename = "v3-pool", rename_all = "camelCase")]
	V3 {
		address: String,
		token_in: TokenInRoute,
		token_out: TokenInRoute,
		#[serde(rename = "sqrtRatioX96")]
		sqrt_ratio_x96: String,
		liquidity: String,
		tick_current: String,
		fee: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		amount_in: Option<String>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		amount_out: Option<String>,
	},
}

/// Calldata for executing the route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParameters {
	pub calldata: String,
	pub value: String,
	/// Router address and any other fields the engine attaches
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Routing engine response, passed through to clients untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassicQuoteData {
	pub quote_id: String,
	/// Requested amount (input for EXACT_INPUT, output for EXACT_OUTPUT)
	pub amount: U256,
	pub amount_decimals: String,
	/// Quoted amount on the non-exact side
	pub quote: U256,
	pub quote_decimals: String,
	pub quote_gas_adjusted: String,
	pub quote_gas_adjusted_decimals: String,
	pub gas_use_estimate: String,
	pub gas_use_estimate_quote: String,
	pub gas_use_estimate_quote_decimals: String,
	#[serde(rename = "gasUseEstimateUSD")]
	pub gas_use_estimate_usd: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub simulation_error: Option<bool>,
	pub simulation_status: String,
	pub gas_price_wei: String,
	pub block_number: String,
	pub route: Vec<Vec<PoolInRoute>>,
	pub route_string: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub method_parameters: Option<MethodParameters>,
	/// Fields not modelled above, forwarded to the client as received
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Quote from the classic routing engine
///
/// The raw response already is the client payload, so there is no separate order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicQuote {
	quote_data: ClassicQuoteData,
	trade_type: TradeType,
}

impl ClassicQuote {
	pub fn from_response_body(body: ClassicQuoteData, trade_type: TradeType) -> Self {
		Self {
			quote_data: body,
			trade_type,
		}
	}

	pub fn data(&self) -> &ClassicQuoteData {
		&self.quote_data
	}

	pub fn to_json(&self) -> ClassicQuoteData {
		self.quote_data.clone()
	}

	pub fn to_order(&self) -> ClassicQuoteData {
		self.to_json()
	}

	pub fn amount_out(&self) -> U256 {
		match self.trade_type {
			TradeType::ExactInput => self.quote_data.quote,
			TradeType::ExactOutput => self.quote_data.amount,
		}
	}

	pub fn amount_in(&self) -> U256 {
		match self.trade_type {
			TradeType::ExactOutput => self.quote_data.quote,
			TradeType::ExactInput => self.quote_data.amount,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn response_json() -> serde_json::Value {
		let usdc = json!({
			"address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
			"chainId": 1,
			"symbol": "USDC",
			"decimals": "6"
		});
		let usdt = json!({
			"address": "0xdAC17F958D2ee523a2206206994597C13D831ec7",
			"chainId": 1,
			"symbol": "USDT",
			"decimals": "6"
		});
		json!({
			"quoteId": "q-1",
			"amount": "10000000000",
			"amountDecimals": "10000",
			"quote": "9990000000",
			"quoteDecimals": "9990",
			"quoteGasAdjusted": "9985000000",
			"quoteGasAdjustedDecimals": "9985",
			"gasUseEstimate": "120000",
			"gasUseEstimateQuote": "5000000",
			"gasUseEstimateQuoteDecimals": "5",
			"gasUseEstimateUSD": "5.01",
			"simulationStatus": "UNATTEMPTED",
			"gasPriceWei": "20000000000",
			"blockNumber": "16000000",
			"route": [[
				{
					"type": "v3-pool",
					"address": "0x3416cF6C708Da44DB2624D63ea0AAef7113527C6",
					"tokenIn": usdc,
					"tokenOut": usdt,
					"sqrtRatioX96": "79228162514264337593543950336",
					"liquidity": "1000000",
					"tickCurrent": "0",
					"fee": "100",
					"amountIn": "10000000000"
				},
				{
					"type": "v2-pool",
					"address": "0x3041CbD36888bECc7bbCBc0045E3B1f144466f5f",
					"tokenIn": usdt,
					"tokenOut": usdc,
					"reserve0": { "token": usdc, "quotient": "1" },
					"reserve1": { "token": usdt, "quotient": "2" }
				}
			]],
			"routeString": "[V3] 0.01% = USDC -- USDT",
			"methodParameters": { "calldata": "0x", "value": "0x00" }
		})
	}

	#[test]
	fn test_unmodelled_fields_survive_to_order() {
		let mut raw = response_json();
		raw["hitsCachedRoutes"] = json!(true);
		raw["portionBips"] = json!(0);
		raw["methodParameters"]["to"] = json!("0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD");

		let data: ClassicQuoteData = serde_json::from_value(raw.clone()).unwrap();
		assert_eq!(data.extra.get("hitsCachedRoutes"), Some(&json!(true)));
		let to = data.method_parameters.as_ref().unwrap().extra.get("to");
		assert_eq!(to, Some(&json!("0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD")));

		let quote = ClassicQuote::from_response_body(data, TradeType::ExactInput);
		assert_eq!(serde_json::to_value(quote.to_order()).unwrap(), raw);
	}

	#[test]
	fn test_amounts_follow_trade_type() {
		let data: ClassicQuoteData = serde_json::from_value(response_json()).unwrap();

		let exact_in = ClassicQuote::from_response_body(data.clone(), TradeType::ExactInput);
		assert_eq!(exact_in.amount_in(), U256::from(10_000_000_000u64));
		assert_eq!(exact_in.amount_out(), U256::from(9_990_000_000u64));

		let exact_out = ClassicQuote::from_response_body(data, TradeType::ExactOutput);
		assert_eq!(exact_out.amount_in(), U256::from(9_990_000_000u64));
		assert_eq!(exact_out.amount_out(), U256::from(10_000_000_000u64));
	}

	#[test]
	fn test_response_passes_through_unchanged() {
		let raw = response_json();
		let data: ClassicQuoteData = serde_json::from_value(raw.clone()).unwrap();
		assert!(matches!(data.route[0][0], PoolInRoute::V3 { .. }));
		assert!(matches!(data.route[0][1], PoolInRoute::V2 { .. }));

		let quote = ClassicQuote::from_response_body(data, TradeType::ExactInput);
		assert_eq!(serde_json::to_value(quote.to_order()).unwrap(), raw);

		let rebuilt = ClassicQuote::from_response_body(quote.to_json(), TradeType::ExactInput);
		assert_eq!(rebuilt, quote);
	}
}
