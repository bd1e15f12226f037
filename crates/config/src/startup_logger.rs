//! Service startup logging for the unified routing service

use std::env;
use tracing::info;

use crate::settings::Settings;

/// Logs service information at startup
pub fn log_service_info() {
	// Use the root package name and version, not the current crate
	let service_name = "unified-routing";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Unified Routing Service Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs the quoting setup the service will run with
pub fn log_quoter_setup(settings: &Settings) {
	for (routing_type, quoter) in settings.enabled_quoters() {
		info!(
			"📡 Quoter {} -> {} (timeout {}ms)",
			routing_type,
			quoter.endpoint,
			quoter.timeout_ms(&settings.timeouts)
		);
	}
	info!(
		"🧮 Dutch-limit minimum order size: ${}",
		settings.filters.gouda_min_order_size_usd
	);
	info!("🪙 Token list: {} entries", settings.tokens.len());
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 Unified Routing Service Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs additional startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Unified Routing Service Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
}
