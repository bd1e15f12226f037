//! Minimum notional for dutch-limit orders

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use ur_types::{DutchLimitQuote, Quote, QuoteRequest};

use super::QuoteFilter;
use crate::pricing::PriceOracle;

/// Drops dutch-limit quotes too small to be worth settling
///
/// The notional is the USD value of the input leg, or of the output leg when
/// the input token has no price. Classic quotes are never touched.
#[derive(Clone)]
pub struct GoudaOrderSizeFilter {
	oracle: Arc<dyn PriceOracle>,
	min_order_size_usd: Decimal,
}

impl GoudaOrderSizeFilter {
	pub fn new(oracle: Arc<dyn PriceOracle>, min_order_size_usd: Decimal) -> Self {
		Self {
			oracle,
			min_order_size_usd,
		}
	}

	pub fn min_order_size_usd(&self) -> Decimal {
		self.min_order_size_usd
	}

	async fn notional(&self, quote: &DutchLimitQuote) -> Option<Decimal> {
		if let Some(value) = self
			.oracle
			.usd_value(quote.chain_id, &quote.token_in, quote.amount_in)
			.await
		{
			return Some(value);
		}
		self.oracle
			.usd_value(quote.chain_id, &quote.token_out, quote.amount_out)
			.await
	}
}

#[async_trait]
impl QuoteFilter for GoudaOrderSizeFilter {
	async fn filter(&self, _requests: &[QuoteRequest], quotes: Vec<Quote>) -> Vec<Quote> {
		let mut kept = Vec::with_capacity(quotes.len());

		for quote in quotes {
			let Quote::DutchLimit(dutch) = &quote else {
				kept.push(quote);
				continue;
			};

			match self.notional(dutch).await {
				Some(value) if value >= self.min_order_size_usd => kept.push(quote),
				Some(value) => {
					debug!(
						"Dropping dutch-limit quote {}: ${} is below the ${} minimum",
						dutch.request_id, value, self.min_order_size_usd
					);
				},
				None => {
					warn!(
						"Dropping dutch-limit quote {}: neither {} nor {} has a USD price on chain {}",
						dutch.request_id, dutch.token_in, dutch.token_out, dutch.chain_id
					);
				},
			}
		}

		kept
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pricing::MockPriceOracle;
	use mockall::predicate::eq;
	use ur_types::test_utils::{QuoteRequestBuilder, TestQuotes};
	use ur_types::{Token, U256};

	fn filter_with(oracle: MockPriceOracle) -> GoudaOrderSizeFilter {
		GoudaOrderSizeFilter::new(Arc::new(oracle), Decimal::from(1_000))
	}

	// Six-decimal stablecoin at one dollar
	fn stable_oracle(token: String) -> MockPriceOracle {
		let mut oracle = MockPriceOracle::new();
		oracle.expect_usd_value().returning(move |_, t, amount| {
			let base_units = u64::try_from(amount.to_u128().unwrap()).unwrap();
			(t == token).then(|| Decimal::new(base_units as i64, 6))
		});
		oracle
	}

	#[tokio::test]
	async fn test_threshold_is_inclusive() {
		let filter = filter_with(stable_oracle(Token::usdc_mainnet().address));
		let request = QuoteRequestBuilder::new().build();

		let kept = filter
			.filter(
				&[request],
				vec![
					TestQuotes::dutch_limit(999_999_999, 999_000_000),
					TestQuotes::dutch_limit(1_000_000_000, 999_000_000),
				],
			)
			.await;

		assert_eq!(kept.len(), 1);
		assert_eq!(kept[0].amount_in(), U256::from(1_000_000_000u64));
	}

	#[tokio::test]
	async fn test_classic_quotes_are_untouched() {
		let mut oracle = MockPriceOracle::new();
		oracle.expect_usd_value().times(0);
		let filter = filter_with(oracle);

		let quotes = vec![TestQuotes::classic_exact_input(1, 1)];
		assert_eq!(filter.filter(&[], quotes.clone()).await, quotes);
	}

	#[tokio::test]
	async fn test_falls_back_to_output_leg() {
		let usdt = Token::usdt_mainnet().address;
		let mut oracle = MockPriceOracle::new();
		oracle
			.expect_usd_value()
			.with(eq(1), eq(Token::usdc_mainnet().address), mockall::predicate::always())
			.times(1)
			.returning(|_, _, _| None);
		oracle
			.expect_usd_value()
			.with(eq(1), eq(usdt), mockall::predicate::always())
			.times(1)
			.returning(|_, _, _| Some(Decimal::from(5_000)));

		let kept = filter_with(oracle)
			.filter(&[], vec![TestQuotes::dutch_limit(1, 1)])
			.await;
		assert_eq!(kept.len(), 1);
	}

	#[tokio::test]
	async fn test_unpriceable_quote_is_dropped() {
		let mut oracle = MockPriceOracle::new();
		oracle.expect_usd_value().times(2).returning(|_, _, _| None);

		let kept = filter_with(oracle)
			.filter(&[], vec![TestQuotes::dutch_limit(10u128.pow(12), 10u128.pow(12))])
			.await;
		assert!(kept.is_empty());
	}

	#[tokio::test]
	async fn test_saturated_notional_passes() {
		let mut oracle = MockPriceOracle::new();
		oracle
			.expect_usd_value()
			.returning(|_, _, _| Some(Decimal::MAX));

		let kept = filter_with(oracle)
			.filter(&[], vec![TestQuotes::dutch_limit(u128::MAX, u128::MAX)])
			.await;
		assert_eq!(kept.len(), 1);
	}

	#[tokio::test]
	async fn test_zero_minimum_keeps_priced_dust() {
		let filter = GoudaOrderSizeFilter::new(
			Arc::new(stable_oracle(Token::usdc_mainnet().address)),
			Decimal::ZERO,
		);
		let kept = filter.filter(&[], vec![TestQuotes::dutch_limit(1, 1)]).await;
		assert_eq!(kept.len(), 1);
	}
}
