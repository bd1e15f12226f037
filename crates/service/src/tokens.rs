//! Token symbol resolution

use std::str::FromStr;
use std::sync::Arc;

use alloy_primitives::Address;
use async_trait::async_trait;
use tracing::debug;
use ur_types::{QuoteValidationError, QuoteValidationResult, TokenList};

/// Turns a token address or symbol into an address
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenResolver: Send + Sync {
	/// Addresses pass through unchanged; symbols are looked up on `chain_id`
	async fn resolve(&self, chain_id: u64, token: &str) -> QuoteValidationResult<String>;
}

/// Resolver backed by the configured token list
#[derive(Debug, Clone)]
pub struct TokenListResolver {
	tokens: Arc<TokenList>,
}

impl TokenListResolver {
	pub fn new(tokens: Arc<TokenList>) -> Self {
		Self { tokens }
	}
}

#[async_trait]
impl TokenResolver for TokenListResolver {
	async fn resolve(&self, chain_id: u64, token: &str) -> QuoteValidationResult<String> {
		if Address::from_str(token).is_ok() {
			return Ok(token.to_string());
		}

		let resolved = self
			.tokens
			.find_by_symbol(chain_id, token)
			.map(|t| t.address.clone())
			.ok_or_else(|| QuoteValidationError::UnknownTokenSymbol {
				symbol: token.to_string(),
			})?;

		debug!("Resolved {} on chain {} to {}", token, chain_id, resolved);
		Ok(resolved)
	}
}
