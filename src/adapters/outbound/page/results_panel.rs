use crate::ports::outbound::{PanelState, RenderedFragment, ResultsPanel};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct PanelContent {
    state: PanelState,
    html: String,
    // (toggle id, detail visible)
    toggles: Vec<(String, bool)>,
}

/// InMemoryResultsPanel adapter for the `result-box` container
///
/// Keeps the current HTML and the bindings of the detail toggles it
/// contains. Replacing the content drops every previous binding, so a
/// toggle id from an earlier render no longer responds.
#[derive(Debug, Default)]
pub struct InMemoryResultsPanel {
    content: Mutex<PanelContent>,
}

impl InMemoryResultsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PanelContent> {
        self.content.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Ids of the toggles bound to the current content
    pub fn toggle_ids(&self) -> Vec<String> {
        self.lock().toggles.iter().map(|(id, _)| id.clone()).collect()
    }
}

impl ResultsPanel for InMemoryResultsPanel {
    fn begin(&self, state: PanelState) {
        let mut content = self.lock();
        content.html.clear();
        content.toggles.clear();
        content.state = state;
    }

    fn show(&self, fragment: RenderedFragment, state: PanelState) {
        let mut content = self.lock();
        content.toggles = fragment
            .toggle_ids
            .into_iter()
            .filter(|id| fragment.html.contains(id.as_str()))
            .map(|id| (id, false))
            .collect();
        content.html = fragment.html;
        content.state = state;
    }

    fn state(&self) -> PanelState {
        self.lock().state
    }

    fn html(&self) -> String {
        self.lock().html.clone()
    }

    fn click_toggle(&self, toggle_id: &str) -> Option<bool> {
        let mut content = self.lock();
        let (_, visible) = content.toggles.iter_mut().find(|(id, _)| id == toggle_id)?;
        *visible = !*visible;
        Some(*visible)
    }

    fn is_detail_visible(&self, toggle_id: &str) -> Option<bool> {
        self.lock()
            .toggles
            .iter()
            .find(|(id, _)| id == toggle_id)
            .map(|(_, visible)| *visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_toggle_fragment() -> RenderedFragment {
        RenderedFragment {
            html: r#"<button data-target="a"></button><div id="a" hidden></div><button data-target="b"></button><div id="b" hidden></div>"#
                .to_string(),
            toggle_ids: vec!["a".to_string(), "b".to_string()],
        }
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let panel = InMemoryResultsPanel::new();
        assert_eq!(panel.state(), PanelState::Idle);
        assert!(panel.html().is_empty());
    }

    #[test]
    fn test_toggles_start_hidden_and_flip() {
        let panel = InMemoryResultsPanel::new();
        panel.show(two_toggle_fragment(), PanelState::Rendered);

        assert_eq!(panel.is_detail_visible("a"), Some(false));
        assert_eq!(panel.click_toggle("a"), Some(true));
        assert_eq!(panel.click_toggle("a"), Some(false));
        assert_eq!(panel.click_toggle("a"), Some(true));
    }

    #[test]
    fn test_toggles_are_independent() {
        let panel = InMemoryResultsPanel::new();
        panel.show(two_toggle_fragment(), PanelState::Rendered);

        panel.click_toggle("a");
        assert_eq!(panel.is_detail_visible("a"), Some(true));
        assert_eq!(panel.is_detail_visible("b"), Some(false));
    }

    #[test]
    fn test_replacing_content_unbinds_old_toggles() {
        let panel = InMemoryResultsPanel::new();
        panel.show(two_toggle_fragment(), PanelState::Rendered);
        panel.show(
            RenderedFragment::static_html("<div class=\"bad\">x</div>"),
            PanelState::RequestFailed,
        );

        assert_eq!(panel.click_toggle("a"), None);
        assert!(panel.toggle_ids().is_empty());
        assert_eq!(panel.state(), PanelState::RequestFailed);
    }

    #[test]
    fn test_begin_clears_content() {
        let panel = InMemoryResultsPanel::new();
        panel.show(two_toggle_fragment(), PanelState::Rendered);
        panel.begin(PanelState::Validating);

        assert!(panel.html().is_empty());
        assert!(panel.toggle_ids().is_empty());
        assert_eq!(panel.state(), PanelState::Validating);
    }

    #[test]
    fn test_toggle_missing_from_html_is_not_bound() {
        let panel = InMemoryResultsPanel::new();
        panel.show(
            RenderedFragment {
                html: "<div></div>".to_string(),
                toggle_ids: vec!["ghost".to_string()],
            },
            PanelState::Rendered,
        );
        assert_eq!(panel.click_toggle("ghost"), None);
    }
}
