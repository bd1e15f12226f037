//! Unified Routing Service
//!
//! Core logic for quote aggregation, filtering and selection.

pub mod aggregator;
pub mod filters;
pub mod pricing;
pub mod selector;
pub mod tokens;

pub use aggregator::{QuoteService, QuoteServiceTrait};
pub use filters::{
	default_pipeline, CompoundFilter, GoudaOrderSizeFilter, OnlyConfiguredQuotersFilter,
	QuoteFilter,
};
pub use pricing::{PriceOracle, TokenListPriceOracle};
pub use selector::select_best;
pub use tokens::{TokenListResolver, TokenResolver};
