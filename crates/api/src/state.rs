use std::sync::Arc;

use ur_service::QuoteServiceTrait;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub quote_service: Arc<dyn QuoteServiceTrait>,
}

impl AppState {
	pub fn new(quote_service: Arc<dyn QuoteServiceTrait>) -> Self {
		Self { quote_service }
	}
}
