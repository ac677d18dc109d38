/// Data Transfer Objects for application layer
///
/// Endpoint paths handed to the use cases and the outcomes they report
/// back to the bootstrap.
mod endpoints;
mod outcomes;

pub use endpoints::{Endpoints, DEFAULT_CHECK_ENDPOINT};
pub use outcomes::{CheckOutcome, LoadOutcome};
