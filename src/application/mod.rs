/// Application layer - Use cases, DTOs and the page context
///
/// This layer orchestrates the domain through ports: it loads component
/// lists into widgets and runs compatibility checks against the panel.
pub mod dto;
pub mod factories;
pub mod page_context;
pub mod use_cases;
