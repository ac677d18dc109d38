use crate::compatibility::domain::{CompatibilityResult, ComponentCategory};

/// Result of loading one category list into its widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The widget now holds `count` options
    Loaded { category: ComponentCategory, count: usize },
    /// The load failed and the widget was left untouched
    Failed {
        category: ComponentCategory,
        reason: String,
    },
    /// The context has no widget for the category
    NoWidget { category: ComponentCategory },
}

impl LoadOutcome {
    pub fn category(&self) -> ComponentCategory {
        match self {
            LoadOutcome::Loaded { category, .. }
            | LoadOutcome::Failed { category, .. }
            | LoadOutcome::NoWidget { category } => *category,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// Result of one press of the check trigger
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// Selection incomplete; no request was sent
    Rejected { missing: Vec<ComponentCategory> },
    /// The server answered and the result was rendered
    Rendered(CompatibilityResult),
    /// The request failed; `message` is what the panel shows
    RequestFailed { message: String },
}

impl CheckOutcome {
    /// Whether the server judged the build compatible
    pub fn is_compatible(&self) -> bool {
        matches!(self, CheckOutcome::Rendered(result) if result.is_compatible())
    }
}
