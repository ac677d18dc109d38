use crate::compatibility::domain::ComponentOption;
use std::sync::Arc;

/// Shared handle to a searchable-select widget
pub type WidgetHandle = Arc<dyn SelectWidget>;

/// SelectWidget port for a searchable dropdown
///
/// Widgets own their option lists. Methods take `&self`; implementations use
/// interior mutability so one handle can be shared by the loader (writer of
/// options) and the checker (reader of the selection).
pub trait SelectWidget: Send + Sync {
    /// Replaces the whole option list in one step. Options are never merged
    /// or appended. A selection that is not in the new list is cleared.
    fn replace_choices(&self, options: Vec<ComponentOption>);

    /// Current option list, in display order
    fn choices(&self) -> Vec<ComponentOption>;

    /// Value of the selected option, or `None` when nothing is selected
    fn selected_value(&self) -> Option<String>;

    /// Selects the option whose value matches, falling back to a
    /// case-insensitive label match. Returns `false` when nothing matched.
    fn select(&self, value_or_label: &str) -> bool;

    /// Options whose label contains `query`, as the widget would list them
    fn search(&self, query: &str) -> Vec<ComponentOption>;

    /// Text prompting the user to pick an option
    fn prompt(&self) -> &str;
}
