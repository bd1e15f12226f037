//! Dutch-limit order construction
//!
//! The order is built by a pure function from an immutable parameter set; no
//! builder state survives between calls.

use serde::{Deserialize, Serialize};

use crate::models::U256;

/// Nonce stamped on every dutch-limit order
///
/// TODO: fetch a per-offerer nonce from the order service instead of a constant.
pub const PLACEHOLDER_NONCE: u64 = 100;

/// Input leg of a dutch-limit order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutchInput {
	pub token: String,
	pub start_amount: U256,
	pub end_amount: U256,
}

/// Output leg of a dutch-limit order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutchOutput {
	pub token: String,
	pub start_amount: U256,
	pub end_amount: U256,
	pub recipient: String,
	pub is_fee_output: bool,
}

/// Everything needed to build a dutch-limit order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutchLimitOrderParams {
	pub chain_id: u64,
	pub start_time: u64,
	pub end_time: u64,
	pub deadline: u64,
	pub offerer: String,
	pub nonce: U256,
	pub input: DutchInput,
	pub output: DutchOutput,
}

/// Serializable dutch-limit order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutchLimitOrder {
	pub chain_id: u64,
	pub offerer: String,
	pub nonce: U256,
	pub deadline: u64,
	pub start_time: u64,
	pub end_time: u64,
	pub input: DutchInput,
	pub outputs: Vec<DutchOutput>,
}

/// Build an order with a single input leg and a single output leg
pub fn build_dutch_limit_order(params: DutchLimitOrderParams) -> DutchLimitOrder {
	DutchLimitOrder {
		chain_id: params.chain_id,
		offerer: params.offerer,
		nonce: params.nonce,
		deadline: params.deadline,
		start_time: params.start_time,
		end_time: params.end_time,
		input: params.input,
		outputs: vec![params.output],
	}
}
