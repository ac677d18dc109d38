/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the ports: the reqwest transport, the
/// in-memory page (widgets and results panel), the HTML renderer and the
/// console/file sinks.
pub mod outbound;
