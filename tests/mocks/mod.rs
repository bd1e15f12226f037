//! Centralized mocks and fixtures for testing
//!
//! Reusable quoters, request fixtures and server helpers shared by the
//! integration test files.

pub mod api_fixtures;
pub mod quoters;
pub mod test_server;
pub mod upstream;

// Re-export commonly used items for convenience
#[allow(unused_imports)]
pub use api_fixtures::ApiFixtures;
#[allow(unused_imports)]
pub use quoters::{FailingQuoter, RateQuoter};
#[allow(unused_imports)]
pub use test_server::TestServer;
#[allow(unused_imports)]
pub use upstream::StubBackends;
