//! Unified Routing Quoters
//!
//! HTTP quoters for the classic routing API and the dutch-limit RFQ service,
//! plus the registry that maps each routing type to its quoter.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};
use ur_config::Settings;
use ur_types::RoutingType;

pub mod client;
pub mod gouda_rfq;
pub mod routing_api;

#[cfg(test)]
mod stub;

pub use gouda_rfq::DutchLimitQuoter;
pub use routing_api::ClassicQuoter;
pub use ur_types::{Quoter, QuoterError, QuoterRegistryError, QuoterResult};

/// One quoter per routing type
#[derive(Debug, Clone, Default)]
pub struct QuoterRegistry {
	quoters: BTreeMap<RoutingType, Arc<dyn Quoter>>,
}

impl QuoterRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a quoter under its routing type
	pub fn register(&mut self, quoter: Arc<dyn Quoter>) -> Result<(), QuoterRegistryError> {
		let routing_type = quoter.routing_type();
		if self.quoters.contains_key(&routing_type) {
			return Err(QuoterRegistryError::DuplicateRoutingType { routing_type });
		}

		info!("Registered quoter {} for {}", quoter.id(), routing_type);
		self.quoters.insert(routing_type, quoter);
		Ok(())
	}

	pub fn get(&self, routing_type: RoutingType) -> Option<Arc<dyn Quoter>> {
		self.quoters.get(&routing_type).cloned()
	}

	/// Routing types with a registered quoter, in canonical order
	pub fn routing_types(&self) -> Vec<RoutingType> {
		self.quoters.keys().copied().collect()
	}

	pub fn len(&self) -> usize {
		self.quoters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.quoters.is_empty()
	}

	/// Build the HTTP quoters enabled in settings
	pub fn from_settings(settings: &Settings) -> Result<Self, QuoterRegistryError> {
		let mut registry = Self::new();
		registry.extend_from_settings(settings)?;
		Ok(registry)
	}

	/// Add HTTP quoters for enabled routing types that have no quoter yet
	pub fn extend_from_settings(&mut self, settings: &Settings) -> Result<(), QuoterRegistryError> {
		for (routing_type, config) in settings.enabled_quoters() {
			if self.quoters.contains_key(&routing_type) {
				debug!(
					"Keeping custom quoter for {}; ignoring configured endpoint {}",
					routing_type, config.endpoint
				);
				continue;
			}

			let timeout_ms = config.timeout_ms(&settings.timeouts);
			let quoter: Arc<dyn Quoter> = match routing_type {
				RoutingType::Classic => Arc::new(
					ClassicQuoter::new(config.endpoint.clone(), timeout_ms)
						.map_err(|e| init_failed(routing_type, e))?,
				),
				RoutingType::DutchLimit => Arc::new(
					DutchLimitQuoter::new(config.endpoint.clone(), timeout_ms)
						.map_err(|e| init_failed(routing_type, e))?,
				),
			};
			self.register(quoter)?;
		}

		Ok(())
	}
}

fn init_failed(routing_type: RoutingType, error: QuoterError) -> QuoterRegistryError {
	QuoterRegistryError::InitializationFailed {
		quoter_id: routing_type.to_string(),
		reason: error.to_string(),
	}
}
