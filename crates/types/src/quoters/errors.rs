//! Error types for quoter operations

use thiserror::Error;

use crate::routing::RoutingType;

/// Failure of a single backend call
///
/// These never reach the client; the aggregator logs them and drops the
/// quoter's contribution.
#[derive(Error, Debug)]
pub enum QuoterError {
	#[error("HTTP request failed: {0}")]
	HttpError(#[from] reqwest::Error),

	#[error("Timeout occurred after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("HTTP {status_code}: {reason}")]
	HttpStatusError { status_code: u16, reason: String },

	#[error("Quoter {quoter_id} cannot handle {routing_type} configs")]
	UnsupportedConfig {
		quoter_id: String,
		routing_type: RoutingType,
	},

	#[error("Configuration error: {reason}")]
	ConfigError { reason: String },
}

/// Errors raised while wiring quoters into a registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoterRegistryError {
	#[error("A quoter is already registered for {routing_type}")]
	DuplicateRoutingType { routing_type: RoutingType },

	#[error("Quoter {quoter_id} could not be built: {reason}")]
	InitializationFailed { quoter_id: String, reason: String },
}
