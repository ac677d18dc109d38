/// Shared utilities: error types, the crate-wide Result alias and HTML helpers
pub mod error;
pub mod html;
mod result;

pub use result::Result;
