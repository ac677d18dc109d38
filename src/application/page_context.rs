use crate::adapters::outbound::page::{
    Document, InMemoryResultsPanel, WidgetOptions, CHECK_BUTTON_ID, RESULT_BOX_ID,
};
use crate::application::dto::Endpoints;
use crate::compatibility::domain::{ComponentCategory, Selection};
use crate::ports::outbound::{ResultsPanel, WidgetHandle};
use crate::shared::Result;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Everything the loaders and the checker share for one page
///
/// Owned by the bootstrap and passed explicitly to each use case; there is
/// no global widget registry. Each widget and the results panel has a
/// single writer.
pub struct PageContext {
    widgets: BTreeMap<ComponentCategory, WidgetHandle>,
    results: Arc<dyn ResultsPanel>,
    endpoints: Endpoints,
}

impl PageContext {
    /// Creates a context with no widgets
    pub fn new(endpoints: Endpoints, results: Arc<dyn ResultsPanel>) -> Self {
        Self {
            widgets: BTreeMap::new(),
            results,
            endpoints,
        }
    }

    /// Registers the widget for a category, replacing any previous one
    pub fn with_widget(mut self, category: ComponentCategory, widget: WidgetHandle) -> Self {
        self.widgets.insert(category, widget);
        self
    }

    /// Wraps every category select in `document` and wires the results panel.
    ///
    /// Controls that are missing or already wrapped are skipped with a
    /// warning; the page still works for the remaining categories.
    ///
    /// # Errors
    /// Returns an error if the page lacks the check trigger or the results
    /// container
    pub fn bootstrap(
        document: &mut Document,
        options: &WidgetOptions,
        endpoints: Endpoints,
    ) -> Result<Self> {
        for required in [CHECK_BUTTON_ID, RESULT_BOX_ID] {
            if !document.has_control(required) {
                anyhow::bail!("Page is missing the '{}' control", required);
            }
        }

        let mut context = Self::new(endpoints, Arc::new(InMemoryResultsPanel::new()));
        for category in ComponentCategory::ALL {
            match document.initialize_widget(category.control_id(), options) {
                Some(widget) => {
                    context.widgets.insert(category, widget);
                }
                None => tracing::warn!(
                    control = category.control_id(),
                    "select control missing or already initialized"
                ),
            }
        }
        Ok(context)
    }

    pub fn widget(&self, category: ComponentCategory) -> Option<&WidgetHandle> {
        self.widgets.get(&category)
    }

    pub fn widgets(&self) -> impl Iterator<Item = (ComponentCategory, &WidgetHandle)> {
        self.widgets.iter().map(|(category, widget)| (*category, widget))
    }

    pub fn results(&self) -> &Arc<dyn ResultsPanel> {
        &self.results
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Reads the current value of every widget. Categories without a widget
    /// read as empty.
    pub fn read_selection(&self) -> Selection {
        self.widgets
            .iter()
            .fold(Selection::new(), |selection, (category, widget)| {
                match widget.selected_value() {
                    Some(value) => selection.with(*category, value),
                    None => selection,
                }
            })
    }
}
