//! Stub upstream used by the quoter tests

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Upstream bound to an ephemeral local port
pub struct StubUpstream {
	pub base_url: String,
	handle: JoinHandle<()>,
}

impl StubUpstream {
	pub async fn start(router: Router) -> Self {
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		let handle = tokio::spawn(async move {
			axum::serve(listener, router).await.unwrap();
		});

		Self {
			base_url: format!("http://{}", addr),
			handle,
		}
	}
}

impl Drop for StubUpstream {
	fn drop(&mut self) {
		self.handle.abort();
	}
}
