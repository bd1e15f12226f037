//! Quoter abstraction shared by the quoting backends

pub mod errors;
pub mod traits;

pub use errors::{QuoterError, QuoterRegistryError};
pub use traits::Quoter;

/// Result type for quoter operations
pub type QuoterResult<T> = Result<T, QuoterError>;
