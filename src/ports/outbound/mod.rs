/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, page widgets, console, etc.).
pub mod http_transport;
pub mod output_presenter;
pub mod progress_reporter;
pub mod result_renderer;
pub mod results_panel;
pub mod select_widget;

pub use http_transport::{HttpResponse, HttpTransport};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use result_renderer::{RenderedFragment, ResultRenderer};
pub use results_panel::{PanelState, ResultsPanel};
pub use select_widget::{SelectWidget, WidgetHandle};
