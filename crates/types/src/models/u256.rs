//! U256 model for token amounts expressed in base units

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while parsing a decimal amount string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum U256ParseError {
	#[error("value cannot be empty")]
	Empty,

	#[error("value must contain only decimal digits")]
	InvalidDigits,

	#[error("value does not fit in 256 bits")]
	Overflow,
}

/// Unsigned 256-bit amount
///
/// Wraps [`alloy_primitives::U256`] so that amounts always travel over the wire
/// as base-10 strings, the way token amounts are exchanged with clients and with
/// the quoting backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub alloy_primitives::U256);

impl U256 {
	pub const ZERO: Self = Self(alloy_primitives::U256::ZERO);

	/// Parse a base-10 string, rejecting signs, separators and overflow
	pub fn from_dec_str(value: &str) -> Result<Self, U256ParseError> {
		if value.is_empty() {
			return Err(U256ParseError::Empty);
		}

		if !value.bytes().all(|b| b.is_ascii_digit()) {
			return Err(U256ParseError::InvalidDigits);
		}

		alloy_primitives::U256::from_str_radix(value, 10)
			.map(Self)
			.map_err(|_| U256ParseError::Overflow)
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	/// Try to narrow to u128 (for arithmetic with smaller types)
	pub fn to_u128(&self) -> Option<u128> {
		u128::try_from(self.0).ok()
	}
}

impl fmt::Display for U256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for U256 {
	type Err = U256ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_dec_str(s)
	}
}

impl From<u64> for U256 {
	fn from(value: u64) -> Self {
		Self(alloy_primitives::U256::from(value))
	}
}

impl From<u128> for U256 {
	fn from(value: u128) -> Self {
		Self(alloy_primitives::U256::from(value))
	}
}

impl From<alloy_primitives::U256> for U256 {
	fn from(value: alloy_primitives::U256) -> Self {
		Self(value)
	}
}

// Custom Serde implementation to serialize/deserialize as string
impl serde::Serialize for U256 {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_str(&self.0)
	}
}

impl<'de> serde::Deserialize<'de> for U256 {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		Self::from_dec_str(&value).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_u256_parsing() {
		let val = U256::from_dec_str("1000000000000000000").unwrap();
		assert_eq!(val.to_u128(), Some(1_000_000_000_000_000_000u128));
		assert_eq!(val.to_string(), "1000000000000000000");
	}

	#[test]
	fn test_u256_rejects_invalid_input() {
		assert_eq!(U256::from_dec_str(""), Err(U256ParseError::Empty));
		assert_eq!(U256::from_dec_str("-1"), Err(U256ParseError::InvalidDigits));
		assert_eq!(U256::from_dec_str("12a"), Err(U256ParseError::InvalidDigits));
		assert_eq!(U256::from_dec_str("1_000"), Err(U256ParseError::InvalidDigits));

		// 2^256 is one past the maximum
		let too_big =
			"115792089237316195423570985008687907853269984665640564039457584007913129639936";
		assert_eq!(U256::from_dec_str(too_big), Err(U256ParseError::Overflow));
	}

	#[test]
	fn test_u256_max_value() {
		let max =
			"115792089237316195423570985008687907853269984665640564039457584007913129639935";
		let val = U256::from_dec_str(max).unwrap();
		assert_eq!(val.to_string(), max);
		assert_eq!(val.to_u128(), None);
	}

	#[test]
	fn test_u256_ordering() {
		let small = U256::from(80u64);
		let large = U256::from(100u64);
		assert!(small < large);
		assert!(U256::ZERO.is_zero());
	}

	#[test]
	fn test_u256_serde_as_string() {
		let val = U256::from(2_500_000_000u64);
		let json = serde_json::to_string(&val).unwrap();
		assert_eq!(json, "\"2500000000\"");

		let back: U256 = serde_json::from_str(&json).unwrap();
		assert_eq!(back, val);

		assert!(serde_json::from_str::<U256>("\"abc\"").is_err());
		assert!(serde_json::from_str::<U256>("\"\"").is_err());
	}
}
