//! Security-related HTTP response headers setup

use axum::{
	http::header::{HeaderName, HeaderValue},
	Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

/// Apply default security headers suited to a JSON-only API
pub fn add_security_headers<S>(router: Router<S>) -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	router.layer(
		ServiceBuilder::new()
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("x-content-type-options"),
				HeaderValue::from_static("nosniff"),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("x-frame-options"),
				HeaderValue::from_static("DENY"),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("cache-control"),
				HeaderValue::from_static("no-store"),
			)),
	)
}
