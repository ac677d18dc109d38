/// Use cases module containing application business logic orchestration
mod check_compatibility;
mod load_components;

pub use check_compatibility::{CheckCompatibilityUseCase, VALIDATION_MESSAGE};
pub use load_components::LoadComponentsUseCase;
