//! Normalized quote model
//!
//! Every backend response is wrapped into one [`Quote`] variant so filters and
//! the selector can compare quotes across mechanisms through a single view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod classic;
pub mod dutch_limit;
pub mod errors;
pub mod request;
pub mod response;

pub use classic::{ClassicQuote, ClassicQuoteData, MethodParameters, PoolInRoute};
pub use dutch_limit::{DutchLimitQuote, DutchLimitQuoteData};
pub use errors::{QuoteError, QuoteValidationError};
pub use request::{QuoteRequest, QuoteRequestBody};
pub use response::QuoteResponse;

use crate::models::U256;
use crate::orders::DutchLimitOrder;
use crate::routing::RoutingType;

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Result type for quote validation operations
pub type QuoteValidationResult<T> = Result<T, QuoteValidationError>;

/// Quote produced by one of the supported mechanisms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quote {
	Classic(ClassicQuote),
	DutchLimit(DutchLimitQuote),
}

/// Client-facing view of a received quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteData {
	Classic(ClassicQuoteData),
	DutchLimit(DutchLimitQuoteData),
}

/// Mechanism-native order payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteOrder {
	Classic(ClassicQuoteData),
	DutchLimit(DutchLimitOrder),
}

impl Quote {
	pub fn routing_type(&self) -> RoutingType {
		match self {
			Self::Classic(_) => RoutingType::Classic,
			Self::DutchLimit(_) => RoutingType::DutchLimit,
		}
	}

	pub fn amount_in(&self) -> U256 {
		match self {
			Self::Classic(q) => q.amount_in(),
			Self::DutchLimit(q) => q.amount_in,
		}
	}

	pub fn amount_out(&self) -> U256 {
		match self {
			Self::Classic(q) => q.amount_out(),
			Self::DutchLimit(q) => q.amount_out,
		}
	}

	pub fn to_json(&self) -> QuoteData {
		match self {
			Self::Classic(q) => QuoteData::Classic(q.to_json()),
			Self::DutchLimit(q) => QuoteData::DutchLimit(q.to_json()),
		}
	}

	pub fn to_order(&self) -> QuoteOrder {
		self.to_order_at(Utc::now())
	}

	/// Materialize against an explicit clock; classic quotes ignore it
	pub fn to_order_at(&self, now: DateTime<Utc>) -> QuoteOrder {
		match self {
			Self::Classic(q) => QuoteOrder::Classic(q.to_order()),
			Self::DutchLimit(q) => QuoteOrder::DutchLimit(q.to_order_at(now)),
		}
	}
}

impl From<ClassicQuote> for Quote {
	fn from(quote: ClassicQuote) -> Self {
		Self::Classic(quote)
	}
}

impl From<DutchLimitQuote> for Quote {
	fn from(quote: DutchLimitQuote) -> Self {
		Self::DutchLimit(quote)
	}
}
