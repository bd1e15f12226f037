//! Per-mechanism routing configuration
//!
//! A quote request carries an ordered list of routing configs, one per quoting
//! mechanism the client wants priced. Recognised mechanisms are strictly
//! validated; configs for mechanisms this service does not know are dropped so
//! that newer clients can talk to older servers.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::constants::limits::{
	DEFAULT_AUCTION_PERIOD_SECS, DEFAULT_EXCLUSIVE_PERIOD_SECS, MAX_BPS,
};
use crate::quotes::{QuoteValidationError, QuoteValidationResult};

/// Field carrying the mechanism tag in a raw config
pub const ROUTING_TYPE_FIELD: &str = "routingType";

/// Quoting mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoutingType {
	/// AMM routing engine
	Classic,
	/// Off-chain dutch auction order (Gouda)
	DutchLimit,
}

impl RoutingType {
	/// Map a wire tag to a mechanism; unknown tags yield `None`
	pub fn from_tag(tag: &str) -> Option<Self> {
		match tag {
			"classic" | "CLASSIC" => Some(Self::Classic),
			"dutch-limit" | "DUTCH_LIMIT" => Some(Self::DutchLimit),
			_ => None,
		}
	}

	/// Canonical wire tag
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Classic => "classic",
			Self::DutchLimit => "dutch-limit",
		}
	}
}

impl fmt::Display for RoutingType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Serialize for RoutingType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for RoutingType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let tag = String::deserialize(deserializer)?;
		Self::from_tag(&tag)
			.ok_or_else(|| serde::de::Error::custom(format!("unknown routing type: {}", tag)))
	}
}

/// Classic routing carries no parameters of its own; tuning lives in the routing engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicConfig;

impl ClassicConfig {
	pub fn to_json(&self) -> Value {
		json!({ ROUTING_TYPE_FIELD: RoutingType::Classic.as_str() })
	}
}

/// Raw dutch-limit config as sent by clients
///
/// Durations are signed here so negative values can be reported instead of
/// failing deserialization with an opaque message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DutchLimitConfigJson {
	offerer: String,
	exclusive_period_secs: Option<i64>,
	auction_period_secs: Option<i64>,
	exclusivity_override_bps: Option<i64>,
}

/// Validated dutch-limit parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutchLimitConfig {
	/// Swapper address; also the order's output recipient
	pub offerer: String,
	/// Window during which only the exclusive filler may fill
	pub exclusive_period_secs: u64,
	/// Length of the open auction after exclusivity ends
	pub auction_period_secs: u64,
	/// Markup override for the exclusive filler, in basis points
	pub exclusivity_override_bps: Option<u64>,
}

impl DutchLimitConfig {
	pub fn new(offerer: impl Into<String>) -> Self {
		Self {
			offerer: offerer.into(),
			exclusive_period_secs: DEFAULT_EXCLUSIVE_PERIOD_SECS,
			auction_period_secs: DEFAULT_AUCTION_PERIOD_SECS,
			exclusivity_override_bps: None,
		}
	}

	pub fn with_periods(mut self, exclusive_period_secs: u64, auction_period_secs: u64) -> Self {
		self.exclusive_period_secs = exclusive_period_secs;
		self.auction_period_secs = auction_period_secs;
		self
	}

	pub fn with_exclusivity_override_bps(mut self, bps: u64) -> Self {
		self.exclusivity_override_bps = Some(bps);
		self
	}

	/// Parse and validate the config found at `configs[index]`
	fn from_request_body(index: usize, raw: &Value) -> QuoteValidationResult<Self> {
		let field = format!("configs[{}]", index);
		let body: DutchLimitConfigJson =
			serde_json::from_value(raw.clone()).map_err(|e| {
				QuoteValidationError::InvalidRoutingConfig {
					field: field.clone(),
					reason: e.to_string(),
				}
			})?;

		if Address::from_str(&body.offerer).is_err() {
			return Err(QuoteValidationError::InvalidRoutingConfig {
				field,
				reason: format!("offerer '{}' is not a valid address", body.offerer),
			});
		}

		let exclusive_period_secs = non_negative(
			&field,
			"exclusivePeriodSecs",
			body.exclusive_period_secs,
			DEFAULT_EXCLUSIVE_PERIOD_SECS,
		)?;
		let auction_period_secs = non_negative(
			&field,
			"auctionPeriodSecs",
			body.auction_period_secs,
			DEFAULT_AUCTION_PERIOD_SECS,
		)?;
		let exclusivity_override_bps = body
			.exclusivity_override_bps
			.map(|bps| non_negative(&field, "exclusivityOverrideBps", Some(bps), 0))
			.transpose()?;
		if let Some(bps) = exclusivity_override_bps.filter(|bps| *bps > MAX_BPS) {
			return Err(QuoteValidationError::InvalidRoutingConfig {
				field,
				reason: format!(
					"exclusivityOverrideBps must be at most {}, got {}",
					MAX_BPS, bps
				),
			});
		}

		Ok(Self {
			offerer: body.offerer,
			exclusive_period_secs,
			auction_period_secs,
			exclusivity_override_bps,
		})
	}

	pub fn to_json(&self) -> Value {
		let mut value = json!({
			ROUTING_TYPE_FIELD: RoutingType::DutchLimit.as_str(),
			"offerer": self.offerer,
			"exclusivePeriodSecs": self.exclusive_period_secs,
			"auctionPeriodSecs": self.auction_period_secs,
		});
		if let Some(bps) = self.exclusivity_override_bps {
			value["exclusivityOverrideBps"] = json!(bps);
		}
		value
	}
}

fn non_negative(
	field: &str,
	name: &str,
	value: Option<i64>,
	default: u64,
) -> QuoteValidationResult<u64> {
	match value {
		None => Ok(default),
		Some(v) => u64::try_from(v).map_err(|_| QuoteValidationError::InvalidRoutingConfig {
			field: field.to_string(),
			reason: format!("{} must be non-negative, got {}", name, v),
		}),
	}
}

/// Routing configuration for a single quoting mechanism
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingConfig {
	Classic(ClassicConfig),
	DutchLimit(DutchLimitConfig),
}

impl RoutingConfig {
	pub fn routing_type(&self) -> RoutingType {
		match self {
			Self::Classic(_) => RoutingType::Classic,
			Self::DutchLimit(_) => RoutingType::DutchLimit,
		}
	}

	/// Parse the raw config found at `configs[index]`
	///
	/// Returns `Ok(None)` when the mechanism tag is missing or unknown. A
	/// recognised mechanism with invalid parameters is an error.
	pub fn from_request_body(index: usize, raw: &Value) -> QuoteValidationResult<Option<Self>> {
		let Some(tag) = raw.get(ROUTING_TYPE_FIELD).and_then(Value::as_str) else {
			debug!("Dropping configs[{}]: no routing type tag", index);
			return Ok(None);
		};

		match RoutingType::from_tag(tag) {
			Some(RoutingType::Classic) => Ok(Some(Self::Classic(ClassicConfig))),
			Some(RoutingType::DutchLimit) => {
				DutchLimitConfig::from_request_body(index, raw).map(|c| Some(Self::DutchLimit(c)))
			},
			None => {
				debug!("Dropping configs[{}]: unsupported routing type '{}'", index, tag);
				Ok(None)
			},
		}
	}

	pub fn to_json(&self) -> Value {
		match self {
			Self::Classic(config) => config.to_json(),
			Self::DutchLimit(config) => config.to_json(),
		}
	}

	pub fn as_dutch_limit(&self) -> Option<&DutchLimitConfig> {
		match self {
			Self::DutchLimit(config) => Some(config),
			Self::Classic(_) => None,
		}
	}
}

impl Serialize for RoutingConfig {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		self.to_json().serialize(serializer)
	}
}
