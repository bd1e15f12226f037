//! Quote API response model

use serde::{Deserialize, Serialize};

use super::{Quote, QuoteOrder};
use crate::routing::RoutingType;

/// Successful quote response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
	pub request_id: String,
	/// Mechanism of the winning quote
	pub routing: RoutingType,
	/// Mechanism-native order or quote payload
	pub quote: QuoteOrder,
}

impl QuoteResponse {
	/// Materialize the selected quote into a response
	pub fn from_domain_quote(request_id: String, quote: &Quote) -> Self {
		Self {
			request_id,
			routing: quote.routing_type(),
			quote: quote.to_order(),
		}
	}
}
