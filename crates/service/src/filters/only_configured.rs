//! Drops quotes from mechanisms nobody asked for

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::debug;
use ur_types::{Quote, QuoteRequest, RoutingType};

use super::QuoteFilter;

/// Keeps a quote only if some request carries a config of its routing type
#[derive(Debug, Clone, Copy, Default)]
pub struct OnlyConfiguredQuotersFilter;

#[async_trait]
impl QuoteFilter for OnlyConfiguredQuotersFilter {
	async fn filter(&self, requests: &[QuoteRequest], quotes: Vec<Quote>) -> Vec<Quote> {
		let configured: HashSet<RoutingType> = requests
			.iter()
			.flat_map(QuoteRequest::routing_types)
			.collect();

		quotes
			.into_iter()
			.filter(|quote| {
				let keep = configured.contains(&quote.routing_type());
				if !keep {
					debug!("Dropping unrequested {} quote", quote.routing_type());
				}
				keep
			})
			.collect()
	}
}
