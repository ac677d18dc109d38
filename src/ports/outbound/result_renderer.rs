use crate::compatibility::domain::CompatibilityResult;

/// An HTML fragment ready for the results panel, plus the ids of the
/// detail toggles it contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedFragment {
    pub html: String,
    pub toggle_ids: Vec<String>,
}

impl RenderedFragment {
    /// Fragment without interactive parts
    pub fn static_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            toggle_ids: Vec::new(),
        }
    }
}

/// ResultRenderer port for turning check results into panel content
///
/// Rendering is total: every `CompatibilityResult` produces a fragment and
/// only sections whose field is present are rendered. Untrusted text must be
/// escaped before it is interpolated.
pub trait ResultRenderer: Send + Sync {
    /// Renders a compatibility result
    fn render(&self, result: &CompatibilityResult) -> RenderedFragment;

    /// Renders a single status line, e.g. a validation or failure notice
    fn render_notice(&self, text: &str, ok: bool) -> RenderedFragment;
}
