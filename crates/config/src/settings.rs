//! Configuration settings structures

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ur_types::constants::limits::{
	DEFAULT_QUOTER_TIMEOUT_MS, MAX_QUOTER_TIMEOUT_MS, MIN_QUOTER_TIMEOUT_MS,
};
use ur_types::{RoutingType, Token, TokenList};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub timeouts: TimeoutSettings,
	pub quoters: QuotersSettings,
	pub filters: FilterSettings,
	pub tokens: Vec<TokenConfig>,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TimeoutSettings {
	/// Upper bound for a single quoter call, enforced by the aggregator
	pub per_quoter_ms: u64,
	/// Default HTTP client timeout for quoters that do not set their own
	pub request_ms: u64,
}

/// Quoting backends, one per mechanism
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuotersSettings {
	pub classic: QuoterConfig,
	pub dutch_limit: QuoterConfig,
}

/// Individual quoter configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuoterConfig {
	pub enabled: bool,
	/// Base URL of the backend
	pub endpoint: String,
	/// HTTP timeout override in milliseconds
	#[serde(default)]
	pub timeout_ms: Option<u64>,
}

/// Filter thresholds
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FilterSettings {
	/// Smallest dutch-limit trade worth settling, in USD
	pub gouda_min_order_size_usd: Decimal,
}

/// Token list entry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenConfig {
	pub chain_id: u64,
	pub address: String,
	pub symbol: String,
	pub decimals: u8,
	#[serde(default)]
	pub usd_price: Option<Decimal>,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Validation errors for loaded settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
	#[error("{field} must be greater than zero")]
	ZeroTimeout { field: String },

	#[error("{field} must be between {min}ms and {max}ms, got {value}ms")]
	TimeoutOutOfRange {
		field: String,
		value: u64,
		min: u64,
		max: u64,
	},

	#[error("filters.gouda_min_order_size_usd must not be negative, got {value}")]
	NegativeMinOrderSize { value: String },

	#[error("quoters.{quoter}.endpoint must be set when the quoter is enabled")]
	MissingEndpoint { quoter: String },

	#[error("tokens[{index}].usd_price must not be negative")]
	NegativeTokenPrice { index: usize },
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings {
				host: "0.0.0.0".to_string(),
				port: 3000,
			},
			timeouts: TimeoutSettings {
				per_quoter_ms: DEFAULT_QUOTER_TIMEOUT_MS,
				request_ms: DEFAULT_QUOTER_TIMEOUT_MS,
			},
			quoters: QuotersSettings {
				classic: QuoterConfig {
					enabled: true,
					endpoint: "http://localhost:3001".to_string(),
					timeout_ms: None,
				},
				dutch_limit: QuoterConfig {
					enabled: true,
					endpoint: "http://localhost:3002".to_string(),
					timeout_ms: None,
				},
			},
			filters: FilterSettings {
				gouda_min_order_size_usd: Decimal::from(1_000),
			},
			tokens: default_tokens(),
			logging: LoggingSettings {
				level: "info".to_string(),
				format: LogFormat::Pretty,
				structured: false,
			},
		}
	}
}

impl Default for ServerSettings {
	fn default() -> Self {
		Settings::default().server
	}
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Settings::default().timeouts
	}
}

impl Default for QuotersSettings {
	fn default() -> Self {
		Settings::default().quoters
	}
}

impl Default for FilterSettings {
	fn default() -> Self {
		Settings::default().filters
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Settings::default().logging
	}
}

// Reference prices for the stablecoins; volatile tokens must be priced in config
fn default_tokens() -> Vec<TokenConfig> {
	[Token::usdc_mainnet(), Token::usdt_mainnet()]
		.into_iter()
		.map(|token| TokenConfig {
			chain_id: token.chain_id,
			address: token.address,
			symbol: token.symbol,
			decimals: token.decimals,
			usd_price: Some(Decimal::ONE),
		})
		.chain([Token::weth_mainnet(), Token::uni_mainnet()].into_iter().map(|token| {
			TokenConfig {
				chain_id: token.chain_id,
				address: token.address,
				symbol: token.symbol,
				decimals: token.decimals,
				usd_price: None,
			}
		}))
		.collect()
}

impl QuoterConfig {
	/// Effective HTTP timeout for this quoter
	pub fn timeout_ms(&self, timeouts: &TimeoutSettings) -> u64 {
		self.timeout_ms.unwrap_or(timeouts.request_ms)
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Configured quoters that are switched on
	pub fn enabled_quoters(&self) -> Vec<(RoutingType, &QuoterConfig)> {
		[
			(RoutingType::Classic, &self.quoters.classic),
			(RoutingType::DutchLimit, &self.quoters.dutch_limit),
		]
		.into_iter()
		.filter(|(_, config)| config.enabled)
		.collect()
	}

	/// Build the token list used for symbol resolution and pricing
	pub fn token_list(&self) -> TokenList {
		self.tokens
			.iter()
			.map(|entry| Token {
				chain_id: entry.chain_id,
				address: entry.address.clone(),
				symbol: entry.symbol.clone(),
				decimals: entry.decimals,
				usd_price: entry.usd_price,
			})
			.collect()
	}

	/// Check ranges the type system cannot express
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		check_timeout("timeouts.per_quoter_ms", self.timeouts.per_quoter_ms)?;
		check_timeout("timeouts.request_ms", self.timeouts.request_ms)?;

		for (name, quoter) in [
			("classic", &self.quoters.classic),
			("dutch_limit", &self.quoters.dutch_limit),
		] {
			if let Some(timeout_ms) = quoter.timeout_ms {
				check_timeout(&format!("quoters.{}.timeout_ms", name), timeout_ms)?;
			}
			if quoter.enabled && quoter.endpoint.trim().is_empty() {
				return Err(ConfigValidationError::MissingEndpoint {
					quoter: name.to_string(),
				});
			}
		}

		if self.filters.gouda_min_order_size_usd.is_sign_negative() {
			return Err(ConfigValidationError::NegativeMinOrderSize {
				value: self.filters.gouda_min_order_size_usd.to_string(),
			});
		}

		for (index, token) in self.tokens.iter().enumerate() {
			if token.usd_price.is_some_and(|price| price.is_sign_negative()) {
				return Err(ConfigValidationError::NegativeTokenPrice { index });
			}
		}

		Ok(())
	}
}

fn check_timeout(field: &str, value: u64) -> Result<(), ConfigValidationError> {
	if value == 0 {
		return Err(ConfigValidationError::ZeroTimeout {
			field: field.to_string(),
		});
	}
	if !(MIN_QUOTER_TIMEOUT_MS..=MAX_QUOTER_TIMEOUT_MS).contains(&value) {
		return Err(ConfigValidationError::TimeoutOutOfRange {
			field: field.to_string(),
			value,
			min: MIN_QUOTER_TIMEOUT_MS,
			max: MAX_QUOTER_TIMEOUT_MS,
		});
	}
	Ok(())
}
