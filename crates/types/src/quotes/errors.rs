//! Error types for quote operations

use thiserror::Error;

/// Validation errors for quote requests
///
/// Any of these rejects the request before a single quoter is called.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteValidationError {
	#[error("Invalid amount: {field} - {reason}")]
	InvalidAmount { field: String, reason: String },

	#[error("Invalid trade type: {value}")]
	InvalidTradeType { value: String },

	#[error("Invalid slippage tolerance: {value} (must be a percentage between 0 and 100)")]
	InvalidSlippageTolerance { value: String },

	#[error("\"{field}\" is invalid: {reason}")]
	InvalidRoutingConfig { field: String, reason: String },

	#[error("Could not find token with symbol {symbol}")]
	UnknownTokenSymbol { symbol: String },

	#[error("Missing required field: {field}")]
	MissingRequiredField { field: String },

	#[error("Malformed request body: {reason}")]
	MalformedBody { reason: String },
}

/// General quote-related errors
#[derive(Error, Debug)]
pub enum QuoteError {
	#[error(transparent)]
	Validation(#[from] QuoteValidationError),

	#[error("No quotes available")]
	NoQuotesAvailable,
}

impl QuoteError {
	/// Stable error code exposed to API clients
	pub fn error_code(&self) -> &'static str {
		match self {
			Self::Validation(_) => "VALIDATION_ERROR",
			Self::NoQuotesAvailable => "QUOTE_ERROR",
		}
	}
}
