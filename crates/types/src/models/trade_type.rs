//! Trade direction

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the swap carries the caller-specified exact amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
	ExactInput,
	ExactOutput,
}

impl TradeType {
	/// Resolve the wire name (`EXACT_INPUT` / `EXACT_OUTPUT`)
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"EXACT_INPUT" => Some(Self::ExactInput),
			"EXACT_OUTPUT" => Some(Self::ExactOutput),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::ExactInput => "EXACT_INPUT",
			Self::ExactOutput => "EXACT_OUTPUT",
		}
	}
}

impl fmt::Display for TradeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_trade_type_names() {
		assert_eq!(TradeType::from_name("EXACT_INPUT"), Some(TradeType::ExactInput));
		assert_eq!(TradeType::from_name("EXACT_OUTPUT"), Some(TradeType::ExactOutput));
		assert_eq!(TradeType::from_name("exact_input"), None);
		assert_eq!(
			serde_json::to_string(&TradeType::ExactOutput).unwrap(),
			"\"EXACT_OUTPUT\""
		);
	}
}
