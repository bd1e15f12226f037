//! Token metadata used for symbol resolution and notional pricing

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A token known to the service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Token {
	/// Chain ID where this token exists
	pub chain_id: u64,
	/// Contract address
	pub address: String,
	/// Token symbol (e.g., "USDC", "WETH")
	pub symbol: String,
	/// Number of decimal places
	pub decimals: u8,
	/// Reference USD price of one whole token, if known
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub usd_price: Option<Decimal>,
}

impl Token {
	pub fn new(chain_id: u64, address: String, symbol: String, decimals: u8) -> Self {
		Self {
			chain_id,
			address,
			symbol,
			decimals,
			usd_price: None,
		}
	}

	pub fn with_usd_price(mut self, price: Decimal) -> Self {
		self.usd_price = Some(price);
		self
	}
}

/// Common mainnet tokens
impl Token {
	pub fn usdc_mainnet() -> Self {
		Self::new(
			1,
			"0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(),
			"USDC".to_string(),
			6,
		)
	}

	pub fn usdt_mainnet() -> Self {
		Self::new(
			1,
			"0xdAC17F958D2ee523a2206206994597C13D831ec7".to_string(),
			"USDT".to_string(),
			6,
		)
	}

	pub fn weth_mainnet() -> Self {
		Self::new(
			1,
			"0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2".to_string(),
			"WETH".to_string(),
			18,
		)
	}

	pub fn uni_mainnet() -> Self {
		Self::new(
			1,
			"0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984".to_string(),
			"UNI".to_string(),
			18,
		)
	}
}

/// Ordered collection of known tokens
///
/// Lookups are case-insensitive on both symbol and address. When a symbol is
/// listed twice on the same chain the first entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
	tokens: Vec<Token>,
}

impl TokenList {
	pub fn new(tokens: Vec<Token>) -> Self {
		Self { tokens }
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Token> {
		self.tokens.iter()
	}

	pub fn find_by_symbol(&self, chain_id: u64, symbol: &str) -> Option<&Token> {
		self.tokens
			.iter()
			.find(|t| t.chain_id == chain_id && t.symbol.eq_ignore_ascii_case(symbol))
	}

	pub fn find_by_address(&self, chain_id: u64, address: &str) -> Option<&Token> {
		self.tokens
			.iter()
			.find(|t| t.chain_id == chain_id && t.address.eq_ignore_ascii_case(address))
	}
}

impl FromIterator<Token> for TokenList {
	fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
