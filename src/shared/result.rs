/// Crate-wide result type.
///
/// Outer layers (config, bootstrap, output) propagate `anyhow::Error`;
/// typed failures are `CheckerError` values converted with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
