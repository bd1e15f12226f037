//! USD notional pricing for order size checks

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;
use ur_types::{TokenList, U256};

/// Largest scale `Decimal` can represent
const MAX_DECIMAL_SCALE: u32 = 28;

/// Prices token amounts in USD
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceOracle: Send + Sync {
	/// USD value of `amount` base units of `token`, or `None` when unknown
	///
	/// Values too large for `Decimal` saturate to `Decimal::MAX`.
	async fn usd_value(&self, chain_id: u64, token: &str, amount: U256) -> Option<Decimal>;
}

/// Oracle using the static prices of the configured token list
#[derive(Debug, Clone)]
pub struct TokenListPriceOracle {
	tokens: Arc<TokenList>,
}

impl TokenListPriceOracle {
	pub fn new(tokens: Arc<TokenList>) -> Self {
		Self { tokens }
	}
}

#[async_trait]
impl PriceOracle for TokenListPriceOracle {
	async fn usd_value(&self, chain_id: u64, token: &str, amount: U256) -> Option<Decimal> {
		let Some(entry) = self.tokens.find_by_address(chain_id, token) else {
			debug!("No token list entry for {} on chain {}", token, chain_id);
			return None;
		};
		let price = entry.usd_price?;

		if price.is_zero() || amount.is_zero() {
			return Some(Decimal::ZERO);
		}

		Some(
			to_whole_units(amount, entry.decimals)
				.and_then(|units| units.checked_mul(price))
				.unwrap_or(Decimal::MAX),
		)
	}
}

// amount / 10^decimals; None when the amount does not fit in a Decimal
fn to_whole_units(amount: U256, decimals: u8) -> Option<Decimal> {
	let raw = i128::try_from(amount.to_u128()?).ok()?;
	let decimals = u32::from(decimals);
	let scale = decimals.min(MAX_DECIMAL_SCALE);

	let mut units = Decimal::try_from_i128_with_scale(raw, scale).ok()?;
	for _ in scale..decimals {
		units = units.checked_div(Decimal::TEN)?;
	}
	Some(units)
}
