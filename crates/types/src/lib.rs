//! Unified Routing Types
//!
//! Shared models and traits for the unified routing quote service.
//! This crate contains the request, quote and order models organized by
//! business entity, plus the quoter abstraction implemented by the backends.

pub mod constants;
pub mod models;
pub mod orders;
pub mod quoters;
pub mod quotes;
pub mod routing;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use models::{Token, TokenList, TradeType, U256ParseError, U256};

pub use orders::{build_dutch_limit_order, DutchLimitOrder, DutchLimitOrderParams};

pub use quoters::{Quoter, QuoterError, QuoterRegistryError, QuoterResult};

pub use quotes::{
	ClassicQuote, ClassicQuoteData, DutchLimitQuote, DutchLimitQuoteData, Quote, QuoteData,
	QuoteError, QuoteOrder, QuoteRequest, QuoteRequestBody, QuoteResponse, QuoteResult,
	QuoteValidationError, QuoteValidationResult,
};

pub use routing::{ClassicConfig, DutchLimitConfig, RoutingConfig, RoutingType};
