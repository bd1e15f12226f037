//! Core aggregation service logic

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use futures::future::join_all;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};
use ur_quoters::QuoterRegistry;
use ur_types::{Quote, QuoteError, QuoteRequest, QuoteResult, RoutingConfig, RoutingType};

use crate::filters::QuoteFilter;
use crate::selector::select_best;
use crate::tokens::TokenResolver;

/// Entry point used by the API layer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
	/// Resolve, fetch, filter and select the best quote for a parsed request
	async fn get_best_quote(&self, request: QuoteRequest) -> QuoteResult<Quote>;

	/// Mechanisms with a registered quoter
	fn routing_types(&self) -> Vec<RoutingType>;
}

/// Service for aggregating quotes across routing mechanisms
pub struct QuoteService {
	registry: QuoterRegistry,
	filter: Arc<dyn QuoteFilter>,
	resolver: Arc<dyn TokenResolver>,
	per_quoter_timeout_ms: u64,
}

impl QuoteService {
	pub fn new(
		registry: QuoterRegistry,
		filter: Arc<dyn QuoteFilter>,
		resolver: Arc<dyn TokenResolver>,
		per_quoter_timeout_ms: u64,
	) -> Self {
		Self {
			registry,
			filter,
			resolver,
			per_quoter_timeout_ms,
		}
	}

	/// Fetch one quote per routing config, concurrently
	///
	/// Quotes come back in config order. Failed, empty and timed-out fetches
	/// contribute nothing. The fetches live inside the returned future, so
	/// dropping it cancels whatever is still in flight.
	pub async fn fetch_quotes(&self, request: &QuoteRequest) -> Vec<Quote> {
		info!(
			"Fetching quotes for request {} across {} configs",
			request.request_id,
			request.configs().len()
		);

		let tasks = request
			.configs()
			.iter()
			.map(|config| self.fetch_one(request, config));
		let quotes: Vec<Quote> = join_all(tasks).await.into_iter().flatten().collect();

		info!(
			"Quote aggregation completed: {} quotes for request {}",
			quotes.len(),
			request.request_id
		);
		quotes
	}

	async fn fetch_one(&self, request: &QuoteRequest, config: &RoutingConfig) -> Option<Quote> {
		let routing_type = config.routing_type();
		let Some(quoter) = self.registry.get(routing_type) else {
			warn!("No quoter registered for {}", routing_type);
			return None;
		};

		let started = Instant::now();
		let result = timeout(
			Duration::from_millis(self.per_quoter_timeout_ms),
			quoter.quote(request, config),
		)
		.await;

		match result {
			Ok(Ok(Some(quote))) => {
				debug!(
					"Quoter {} answered in {}ms",
					quoter.id(),
					started.elapsed().as_millis()
				);
				Some(quote)
			},
			Ok(Ok(None)) => {
				debug!("Quoter {} had no quote", quoter.id());
				None
			},
			Ok(Err(e)) => {
				warn!("Quoter {} returned error: {}", quoter.id(), e);
				None
			},
			Err(_) => {
				warn!(
					"Quoter {} timed out after {}ms",
					quoter.id(),
					self.per_quoter_timeout_ms
				);
				None
			},
		}
	}
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
	async fn get_best_quote(&self, request: QuoteRequest) -> QuoteResult<Quote> {
		let token_in = self
			.resolver
			.resolve(request.token_in_chain_id, &request.token_in)
			.await?;
		let token_out = self
			.resolver
			.resolve(request.token_out_chain_id, &request.token_out)
			.await?;
		let request = request.with_resolved_tokens(token_in, token_out);

		let quotes = self.fetch_quotes(&request).await;
		let quotes = self
			.filter
			.filter(std::slice::from_ref(&request), quotes)
			.await;

		let best = select_best(quotes, request.trade_type).ok_or(QuoteError::NoQuotesAvailable)?;
		info!(
			"Selected {} quote for request {}",
			best.routing_type(),
			request.request_id
		);
		Ok(best)
	}

	fn routing_types(&self) -> Vec<RoutingType> {
		self.registry.routing_types()
	}
}
