/// Factories selecting infrastructure adapters for the CLI
mod presenter_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
