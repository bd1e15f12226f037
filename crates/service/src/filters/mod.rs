//! Quote filter pipeline
//!
//! Filters run after every quoter has answered and before selection. A quote
//! survives only if every filter in the pipeline keeps it.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use ur_types::{Quote, QuoteRequest};

pub mod compound;
pub mod only_configured;
pub mod order_size;

pub use compound::CompoundFilter;
pub use only_configured::OnlyConfiguredQuotersFilter;
pub use order_size::GoudaOrderSizeFilter;

use crate::pricing::PriceOracle;

/// Removes ineligible quotes
///
/// Implementations never mutate the quotes they keep and preserve their order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteFilter: Send + Sync {
	async fn filter(&self, requests: &[QuoteRequest], quotes: Vec<Quote>) -> Vec<Quote>;
}

/// The production pipeline: configured mechanisms first, then order size
pub fn default_pipeline(
	oracle: Arc<dyn PriceOracle>,
	min_order_size_usd: Decimal,
) -> CompoundFilter {
	CompoundFilter::new(vec![
		Arc::new(OnlyConfiguredQuotersFilter),
		Arc::new(GoudaOrderSizeFilter::new(oracle, min_order_size_usd)),
	])
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pricing::TokenListPriceOracle;
	use ur_types::test_utils::{QuoteRequestBuilder, TestQuotes};
	use ur_types::{RoutingType, Token, TokenList};

	fn oracle() -> Arc<dyn PriceOracle> {
		let tokens: TokenList = vec![
			Token::usdc_mainnet().with_usd_price(Decimal::ONE),
			Token::usdt_mainnet().with_usd_price(Decimal::ONE),
		]
		.into_iter()
		.collect();
		Arc::new(TokenListPriceOracle::new(Arc::new(tokens)))
	}

	fn quotes() -> Vec<Quote> {
		vec![
			// 10 USDC, below the minimum
			TestQuotes::dutch_limit(10_000_000, 9_990_000),
			TestQuotes::classic_exact_input(10_000_000, 9_980_000),
			// 5000 USDC
			TestQuotes::dutch_limit(5_000_000_000, 4_995_000_000),
		]
	}

	#[tokio::test]
	async fn test_default_pipeline() {
		let pipeline = default_pipeline(oracle(), Decimal::from(1_000));
		let request = QuoteRequestBuilder::new().classic().dutch_limit().build();

		let kept = pipeline.filter(&[request], quotes()).await;

		assert_eq!(kept.len(), 2);
		assert_eq!(kept[0].routing_type(), RoutingType::Classic);
		assert_eq!(kept[1].amount_in(), ur_types::U256::from(5_000_000_000u64));
	}

	#[tokio::test]
	async fn test_pipeline_is_order_independent() {
		let request = QuoteRequestBuilder::new().dutch_limit().build();
		let forward = default_pipeline(oracle(), Decimal::from(1_000));
		let reversed = CompoundFilter::new(vec![
			Arc::new(GoudaOrderSizeFilter::new(oracle(), Decimal::from(1_000))),
			Arc::new(OnlyConfiguredQuotersFilter),
		]);

		let a = forward.filter(std::slice::from_ref(&request), quotes()).await;
		let b = reversed.filter(std::slice::from_ref(&request), quotes()).await;

		assert_eq!(a, b);
		assert_eq!(a.len(), 1);
		assert_eq!(a[0].routing_type(), RoutingType::DutchLimit);
	}
}
