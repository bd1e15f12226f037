//! Core quoter trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::QuoterResult;
use crate::quotes::{Quote, QuoteRequest};
use crate::routing::{RoutingConfig, RoutingType};

/// Source of quotes for one routing mechanism
///
/// Implementations call a single backend and translate its response into a
/// [`Quote`]. "No quote" is a normal outcome and is returned as `Ok(None)`.
#[async_trait]
pub trait Quoter: Send + Sync + Debug {
	/// Mechanism this quoter serves
	fn routing_type(&self) -> RoutingType;

	/// Identifier used in logs and health output
	fn id(&self) -> &str;

	/// Request a quote for `request` under one of its routing configs
	///
	/// `config` is always of this quoter's routing type.
	async fn quote(
		&self,
		request: &QuoteRequest,
		config: &RoutingConfig,
	) -> QuoterResult<Option<Quote>>;
}
