//! Unified Routing Library
//!
//! Swap quote aggregation across routing mechanisms: classic AMM routes and
//! dutch-limit RFQ orders are quoted concurrently, filtered, and the best one
//! is returned as a ready-to-sign order.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

// Core domain types - the most commonly used types
pub use ur_types::{
	// External dependencies for convenience
	chrono,
	serde_json,
	// Primary domain entities
	DutchLimitConfig,
	DutchLimitOrder,
	Quote,
	// Error types
	QuoteError,
	QuoteRequest,
	QuoteResponse,
	Quoter,
	QuoterError,
	RoutingConfig,
	RoutingType,
	TradeType,
};

// Service layer
pub use ur_service::{
	PriceOracle, QuoteFilter, QuoteService, QuoteServiceTrait, TokenListPriceOracle,
	TokenListResolver, TokenResolver,
};

// API layer
pub use ur_api::{create_router, AppState};

// Quoters
pub use ur_quoters::{ClassicQuoter, DutchLimitQuoter, QuoterRegistry};

// Config
pub use ur_config::{load_config, log_service_info, log_startup_complete, Settings};

pub mod models {
	pub use ur_types::*;
}

pub mod config {
	pub use ur_config::*;
}

pub mod quoters {
	pub use ur_quoters::*;
}

pub mod service {
	pub use ur_service::*;
}

pub mod api {
	pub use ur_api::*;
}

/// Builder pattern for configuring the routing service
#[derive(Default)]
pub struct RoutingServiceBuilder {
	settings: Option<Settings>,
	quoters: Vec<Arc<dyn Quoter>>,
	price_oracle: Option<Arc<dyn PriceOracle>>,
}

impl RoutingServiceBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Use a custom quoter for its routing type instead of the configured endpoint
	pub fn with_quoter(mut self, quoter: Arc<dyn Quoter>) -> Self {
		self.quoters.push(quoter);
		self
	}

	/// Replace the token-list oracle used by the order size filter
	pub fn with_price_oracle(mut self, oracle: Arc<dyn PriceOracle>) -> Self {
		self.price_oracle = Some(oracle);
		self
	}

	/// Build the service and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		settings.validate()?;

		let mut registry = QuoterRegistry::new();
		for quoter in self.quoters {
			registry.register(quoter)?;
		}
		registry.extend_from_settings(&settings)?;
		info!(
			"Successfully initialized with {} quoter(s)",
			registry.len()
		);

		let tokens = Arc::new(settings.token_list());
		let price_oracle = self
			.price_oracle
			.unwrap_or_else(|| Arc::new(TokenListPriceOracle::new(Arc::clone(&tokens))));
		let filter = ur_service::default_pipeline(
			price_oracle,
			settings.filters.gouda_min_order_size_usd,
		);

		let quote_service = QuoteService::new(
			registry,
			Arc::new(filter),
			Arc::new(TokenListResolver::new(tokens)),
			settings.timeouts.per_quoter_ms,
		);

		let app_state = AppState::new(Arc::new(quote_service));
		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	///
	/// Loads `.env`, loads configuration unless settings were provided,
	/// initializes tracing, then binds and serves until ctrl-c.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config()?,
		};

		init_tracing_from_settings(&settings)?;
		log_service_info();
		ur_config::log_quoter_setup(&settings);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  POST /quote");

		axum::serve(listener, app)
			.with_graceful_shutdown(shutdown_signal())
			.await?;

		ur_config::log_service_shutdown();
		Ok(())
	}
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		tracing::warn!("Failed to listen for shutdown signal: {}", e);
		std::future::pending::<()>().await;
	}
}

/// Initialize tracing with configuration-based settings
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing_from_settings(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
	use ur_config::LogFormat;

	let log_level = &settings.logging.level;
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
	let structured = settings.logging.structured;

	let result = match settings.logging.format {
		LogFormat::Json => tracing_subscriber::fmt()
			.json()
			.with_env_filter(env_filter)
			.with_target(structured)
			.with_thread_ids(structured)
			.try_init(),
		LogFormat::Pretty => tracing_subscriber::fmt()
			.pretty()
			.with_env_filter(env_filter)
			.with_target(structured)
			.with_thread_ids(structured)
			.try_init(),
		LogFormat::Compact => tracing_subscriber::fmt()
			.compact()
			.with_env_filter(env_filter)
			.with_target(structured)
			.with_thread_ids(structured)
			.try_init(),
	};
	result.map_err(|e| format!("Failed to initialize tracing: {}", e))?;

	info!(
		"Logging configuration applied: level={}, format={:?}, structured={}",
		settings.logging.level, settings.logging.format, settings.logging.structured
	);

	Ok(())
}
