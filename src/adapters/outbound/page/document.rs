use super::choices_widget::{ChoicesWidget, WidgetOptions};
use crate::compatibility::domain::ComponentCategory;
use crate::ports::outbound::WidgetHandle;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Class attached to a control once it has been wrapped in a widget
pub const INITIALIZED_MARKER: &str = "choices-initialized";

/// Identifier of the control that triggers a check
pub const CHECK_BUTTON_ID: &str = "check-btn";

/// Identifier of the container that shows check results
pub const RESULT_BOX_ID: &str = "result-box";

/// Kind of element a control id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Select,
    Button,
    Container,
}

/// A page element: its kind and class list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    pub classes: BTreeSet<String>,
}

impl Control {
    fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            classes: BTreeSet::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// In-memory model of the checker page
///
/// Holds the controls by id. The standard page has the five category
/// selects, the check button and the result box.
#[derive(Debug, Clone, Default)]
pub struct Document {
    controls: HashMap<String, Control>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The checker page with every control the controller expects
    pub fn checker_page() -> Self {
        let mut document = Self::new();
        for category in ComponentCategory::ALL {
            document.add_control(category.control_id(), ControlKind::Select);
        }
        document.add_control(CHECK_BUTTON_ID, ControlKind::Button);
        document.add_control(RESULT_BOX_ID, ControlKind::Container);
        document
    }

    pub fn add_control(&mut self, id: impl Into<String>, kind: ControlKind) {
        self.controls.insert(id.into(), Control::new(kind));
    }

    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls.get(id)
    }

    pub fn has_control(&self, id: &str) -> bool {
        self.controls.contains_key(id)
    }

    /// Wraps the select `control_id` in a searchable widget.
    ///
    /// Returns `None` when the control is missing, is not a select, or has
    /// already been wrapped; calling twice on the same control is a no-op.
    pub fn initialize_widget(
        &mut self,
        control_id: &str,
        options: &WidgetOptions,
    ) -> Option<WidgetHandle> {
        let control = self.controls.get_mut(control_id)?;
        if control.kind != ControlKind::Select || control.has_class(INITIALIZED_MARKER) {
            return None;
        }
        control.classes.insert(INITIALIZED_MARKER.to_string());

        let widget: WidgetHandle = Arc::new(ChoicesWidget::new(control_id, options.clone()));
        Some(widget)
    }
}
