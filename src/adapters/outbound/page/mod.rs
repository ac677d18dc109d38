/// Page adapters: the in-memory document, searchable-select widgets and
/// the results panel
mod choices_widget;
mod document;
mod results_panel;

pub use choices_widget::{ChoicesWidget, WidgetOptions};
pub use document::{
    Control, ControlKind, Document, CHECK_BUTTON_ID, INITIALIZED_MARKER, RESULT_BOX_ID,
};
pub use results_panel::InMemoryResultsPanel;
