//! Quote request model and validation

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{QuoteValidationError, QuoteValidationResult};
use crate::constants::limits::MAX_SLIPPAGE_TOLERANCE_PERCENT;
use crate::models::{TradeType, U256};
use crate::routing::{RoutingConfig, RoutingType};

/// API request body for the quote endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestBody {
	pub token_in_chain_id: u64,
	pub token_out_chain_id: u64,
	pub request_id: String,
	/// Token address or symbol
	pub token_in: String,
	/// Token address or symbol
	pub token_out: String,
	/// Amount in base units, as a decimal string
	pub amount: String,
	/// `EXACT_INPUT` or `EXACT_OUTPUT`
	#[serde(rename = "type", alias = "tradeType")]
	pub trade_type: String,
	/// Decimal percentage, e.g. "0.5"
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub slippage_tolerance: Option<String>,
	/// One entry per requested mechanism, tagged by `routingType`
	pub configs: Vec<Value>,
}

/// Parsed and validated quote request
///
/// The routing configs are fixed at parse time and only exposed by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
	pub token_in_chain_id: u64,
	pub token_out_chain_id: u64,
	pub request_id: String,
	pub token_in: String,
	pub token_out: String,
	pub amount: U256,
	pub trade_type: TradeType,
	pub slippage_tolerance: Option<String>,
	configs: Vec<RoutingConfig>,
}

impl QuoteRequest {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		token_in_chain_id: u64,
		token_out_chain_id: u64,
		request_id: String,
		token_in: String,
		token_out: String,
		amount: U256,
		trade_type: TradeType,
		configs: Vec<RoutingConfig>,
		slippage_tolerance: Option<String>,
	) -> Self {
		Self {
			token_in_chain_id,
			token_out_chain_id,
			request_id,
			token_in,
			token_out,
			amount,
			trade_type,
			slippage_tolerance,
			configs,
		}
	}

	/// Parse a raw request body
	///
	/// Applied validations:
	/// - **requestId / tokenIn / tokenOut**: must be non-empty
	/// - **amount**: decimal digits only, fits in 256 bits, greater than zero
	/// - **type**: `EXACT_INPUT` or `EXACT_OUTPUT`
	/// - **slippageTolerance**: decimal percentage in [0, 100]
	/// - **configs**: recognised mechanisms are validated, unknown ones are dropped
	pub fn from_request_body(body: QuoteRequestBody) -> QuoteValidationResult<Self> {
		for (field, value) in [
			("requestId", &body.request_id),
			("tokenIn", &body.token_in),
			("tokenOut", &body.token_out),
		] {
			if value.trim().is_empty() {
				return Err(QuoteValidationError::MissingRequiredField {
					field: field.to_string(),
				});
			}
		}

		let amount =
			U256::from_dec_str(&body.amount).map_err(|e| QuoteValidationError::InvalidAmount {
				field: "amount".to_string(),
				reason: e.to_string(),
			})?;
		if amount.is_zero() {
			return Err(QuoteValidationError::InvalidAmount {
				field: "amount".to_string(),
				reason: "must be greater than zero".to_string(),
			});
		}

		let trade_type = TradeType::from_name(&body.trade_type).ok_or_else(|| {
			QuoteValidationError::InvalidTradeType {
				value: body.trade_type.clone(),
			}
		})?;

		if let Some(slippage) = &body.slippage_tolerance {
			validate_slippage_tolerance(slippage)?;
		}

		let configs = Self::parse_configs(&body.configs)?;

		Ok(Self {
			token_in_chain_id: body.token_in_chain_id,
			token_out_chain_id: body.token_out_chain_id,
			request_id: body.request_id,
			token_in: body.token_in,
			token_out: body.token_out,
			amount,
			trade_type,
			slippage_tolerance: body.slippage_tolerance,
			configs,
		})
	}

	// ignores routing types that are not supported
	fn parse_configs(raw: &[Value]) -> QuoteValidationResult<Vec<RoutingConfig>> {
		let mut configs = Vec::with_capacity(raw.len());
		for (index, value) in raw.iter().enumerate() {
			if let Some(config) = RoutingConfig::from_request_body(index, value)? {
				configs.push(config);
			}
		}
		Ok(configs)
	}

	/// Serialize back to the client-facing body
	pub fn to_json(&self) -> QuoteRequestBody {
		QuoteRequestBody {
			token_in_chain_id: self.token_in_chain_id,
			token_out_chain_id: self.token_out_chain_id,
			request_id: self.request_id.clone(),
			token_in: self.token_in.clone(),
			token_out: self.token_out.clone(),
			amount: self.amount.to_string(),
			trade_type: self.trade_type.as_str().to_string(),
			slippage_tolerance: self.slippage_tolerance.clone(),
			configs: self.configs.iter().map(RoutingConfig::to_json).collect(),
		}
	}

	pub fn configs(&self) -> &[RoutingConfig] {
		&self.configs
	}

	/// Mechanisms requested, in config order (duplicates preserved)
	pub fn routing_types(&self) -> impl Iterator<Item = RoutingType> + '_ {
		self.configs.iter().map(RoutingConfig::routing_type)
	}

	/// Copy of this request with token symbols replaced by resolved addresses
	pub fn with_resolved_tokens(&self, token_in: String, token_out: String) -> Self {
		Self {
			token_in,
			token_out,
			..self.clone()
		}
	}
}

fn validate_slippage_tolerance(value: &str) -> QuoteValidationResult<Decimal> {
	let invalid = || QuoteValidationError::InvalidSlippageTolerance {
		value: value.to_string(),
	};

	let parsed = Decimal::from_str(value.trim()).map_err(|_| invalid())?;
	if parsed.is_sign_negative() || parsed > Decimal::from(MAX_SLIPPAGE_TOLERANCE_PERCENT) {
		return Err(invalid());
	}
	Ok(parsed)
}
