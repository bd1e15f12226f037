//! Unified Routing Server
//!
//! Main entry point for the quote server

use unified_routing::RoutingServiceBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	RoutingServiceBuilder::new().start_server().await
}
