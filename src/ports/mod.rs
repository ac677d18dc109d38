/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports describe what the controller needs from the
/// outside world: a network transport, select widgets, a results panel,
/// a renderer, and output/progress sinks.
pub mod outbound;
