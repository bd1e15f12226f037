//! Dutch-limit (Gouda) quotes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::U256;
use crate::orders::{
	build_dutch_limit_order, DutchInput, DutchLimitOrder, DutchLimitOrderParams, DutchOutput,
	PLACEHOLDER_NONCE,
};
use crate::routing::DutchLimitConfig;

/// Wire shape of an RFQ quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutchLimitQuoteData {
	pub chain_id: u64,
	pub request_id: String,
	pub token_in: String,
	pub amount_in: U256,
	pub token_out: String,
	pub amount_out: U256,
	pub offerer: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub filler: Option<String>,
}

/// Quote matched by an off-chain filler
///
/// Holds the originating config by value; the order time windows are derived
/// from it when the quote is materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutchLimitQuote {
	pub config: DutchLimitConfig,
	pub chain_id: u64,
	pub request_id: String,
	pub token_in: String,
	pub amount_in: U256,
	pub token_out: String,
	pub amount_out: U256,
	pub offerer: String,
	pub filler: Option<String>,
}

impl DutchLimitQuote {
	pub fn from_response_body_and_config(
		config: DutchLimitConfig,
		body: DutchLimitQuoteData,
	) -> Self {
		Self {
			config,
			chain_id: body.chain_id,
			request_id: body.request_id,
			token_in: body.token_in,
			amount_in: body.amount_in,
			token_out: body.token_out,
			amount_out: body.amount_out,
			offerer: body.offerer,
			filler: body.filler,
		}
	}

	pub fn to_json(&self) -> DutchLimitQuoteData {
		DutchLimitQuoteData {
			chain_id: self.chain_id,
			request_id: self.request_id.clone(),
			token_in: self.token_in.clone(),
			amount_in: self.amount_in,
			token_out: self.token_out.clone(),
			amount_out: self.amount_out,
			offerer: self.offerer.clone(),
			filler: self.filler.clone(),
		}
	}

	pub fn to_order(&self) -> DutchLimitOrder {
		self.to_order_at(Utc::now())
	}

	/// Materialize the order relative to `now`
	///
	/// The exclusivity window runs from `now`; the auction starts when it ends
	/// and the deadline coincides with the end of the auction.
	pub fn to_order_at(&self, now: DateTime<Utc>) -> DutchLimitOrder {
		let now = u64::try_from(now.timestamp()).unwrap_or(0);
		let start_time = now.saturating_add(self.config.exclusive_period_secs);
		let end_time = start_time.saturating_add(self.config.auction_period_secs);

		build_dutch_limit_order(DutchLimitOrderParams {
			chain_id: self.chain_id,
			start_time,
			end_time,
			deadline: end_time,
			offerer: self.config.offerer.clone(),
			nonce: U256::from(PLACEHOLDER_NONCE),
			input: DutchInput {
				token: self.token_in.clone(),
				start_amount: self.amount_in,
				end_amount: self.amount_in,
			},
			output: DutchOutput {
				token: self.token_out.clone(),
				start_amount: self.amount_out,
				// TODO: apply slippageTolerance and decay the end amount over the auction
				end_amount: self.amount_out,
				recipient: self.config.offerer.clone(),
				is_fee_output: false,
			},
		})
	}
}
