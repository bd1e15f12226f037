//! Shared domain models used across quoters, filters and the API

pub mod token;
pub mod trade_type;
pub mod u256;

pub use token::{Token, TokenList};
pub use trade_type::TradeType;
pub use u256::{U256ParseError, U256};
