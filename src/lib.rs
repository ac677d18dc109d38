//! build-compat - form controller for a PC build compatibility checker
//!
//! This library loads hardware component lists from a compatibility backend
//! into searchable selects, validates the chosen build, asks the backend for
//! a verdict and renders the answer as an HTML fragment. It follows a
//! hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compatibility`): selections, list-item resolution,
//!   response shapes and message classification
//! - **Application Layer** (`application`): the page context and the load/check use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): reqwest transport, in-memory page, HTML renderer, console and files
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use build_compat::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let transport = ReqwestTransport::new("http://127.0.0.1:8000")?;
//! let mut document = Document::checker_page();
//! let context = PageContext::bootstrap(&mut document, &WidgetOptions::default(), Endpoints::new())?;
//!
//! let loader = LoadComponentsUseCase::new(transport.clone(), StderrProgressReporter::new());
//! loader.load_all(&context).await;
//!
//! for (category, widget) in context.widgets() {
//!     if let Some(first) = widget.choices().first() {
//!         widget.select(first.value());
//!     }
//!     println!("{}: {:?}", category, widget.selected_value());
//! }
//!
//! let checker = CheckCompatibilityUseCase::new(transport, HtmlResultRenderer::new());
//! let outcome = checker.execute(&context).await;
//! println!("{}", context.results().html());
//! println!("compatible: {}", outcome.is_compatible());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod compatibility;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::HtmlResultRenderer;
    pub use crate::adapters::outbound::network::ReqwestTransport;
    pub use crate::adapters::outbound::page::{
        ChoicesWidget, Document, InMemoryResultsPanel, WidgetOptions,
    };
    pub use crate::application::dto::{CheckOutcome, Endpoints, LoadOutcome};
    pub use crate::application::page_context::PageContext;
    pub use crate::application::use_cases::{CheckCompatibilityUseCase, LoadComponentsUseCase};
    pub use crate::compatibility::domain::{
        CompatibilityResult, ComponentCategory, ComponentOption, Selection, Verdict,
    };
    pub use crate::compatibility::policies::{ItemResolution, MessageClassification};
    pub use crate::compatibility::services::ResultInterpreter;
    pub use crate::ports::outbound::{
        HttpResponse, HttpTransport, OutputPresenter, PanelState, ProgressReporter,
        RenderedFragment, ResultRenderer, ResultsPanel, SelectWidget,
    };
    pub use crate::shared::Result;
}
