//! Global limits and defaults for configuration and runtime

/// Minimum allowed timeout for quoter requests in milliseconds
pub const MIN_QUOTER_TIMEOUT_MS: u64 = 100; // 100ms

/// Maximum allowed timeout for quoter requests in milliseconds
pub const MAX_QUOTER_TIMEOUT_MS: u64 = 30_000; // 30s

/// Default timeout for quoter requests in milliseconds
pub const DEFAULT_QUOTER_TIMEOUT_MS: u64 = 2_000; // 2s

/// Default exclusivity window for dutch-limit orders
pub const DEFAULT_EXCLUSIVE_PERIOD_SECS: u64 = 12;

/// Default auction window for dutch-limit orders
pub const DEFAULT_AUCTION_PERIOD_SECS: u64 = 60;

/// Upper bound for a slippage tolerance percentage
pub const MAX_SLIPPAGE_TOLERANCE_PERCENT: u32 = 100;

/// Basis points in 100%
pub const MAX_BPS: u64 = 10_000;
