//! Test server for integration tests

use std::sync::Arc;

use axum::Router;
use rust_decimal::Decimal;
use tokio::task::JoinHandle;
use unified_routing::{Quoter, RoutingServiceBuilder, Settings};

/// Test server instance bound to an ephemeral port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl TestServer {
	/// Default settings with both HTTP quoters switched off
	pub fn settings() -> Settings {
		let mut settings = Settings::default();
		settings.quoters.classic.enabled = false;
		settings.quoters.dutch_limit.enabled = false;
		settings.filters.gouda_min_order_size_usd = Decimal::from(1_000);
		settings
	}

	/// Spawn a server backed by the given quoters
	pub async fn spawn_with_quoters(
		quoters: Vec<Arc<dyn Quoter>>,
	) -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with(Self::settings(), quoters).await
	}

	pub async fn spawn_with(
		settings: Settings,
		quoters: Vec<Arc<dyn Quoter>>,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let mut builder = RoutingServiceBuilder::new().with_settings(settings);
		for quoter in quoters {
			builder = builder.with_quoter(quoter);
		}
		let (app, _state) = builder.start().await?;

		Self::spawn_server_with_app(app).await
	}

	/// Common server spawning logic
	async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		Ok(Self { base_url, handle })
	}

	pub fn quote_url(&self) -> String {
		format!("{}/quote", self.base_url)
	}

	pub fn abort(self) {
		self.handle.abort();
	}
}
