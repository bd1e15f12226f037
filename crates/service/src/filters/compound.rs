//! Sequential composition of filters

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use ur_types::{Quote, QuoteRequest};

use super::QuoteFilter;

/// Runs filters in order, feeding each the previous survivors
///
/// Stops as soon as no quote is left.
#[derive(Clone, Default)]
pub struct CompoundFilter {
	filters: Vec<Arc<dyn QuoteFilter>>,
}

impl CompoundFilter {
	pub fn new(filters: Vec<Arc<dyn QuoteFilter>>) -> Self {
		Self { filters }
	}

	pub fn len(&self) -> usize {
		self.filters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.filters.is_empty()
	}
}

#[async_trait]
impl QuoteFilter for CompoundFilter {
	async fn filter(&self, requests: &[QuoteRequest], mut quotes: Vec<Quote>) -> Vec<Quote> {
		for (stage, filter) in self.filters.iter().enumerate() {
			if quotes.is_empty() {
				debug!("No quotes left before filter stage {}", stage);
				break;
			}
			quotes = filter.filter(requests, quotes).await;
		}
		quotes
	}
}
