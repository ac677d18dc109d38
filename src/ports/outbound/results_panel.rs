use super::RenderedFragment;
use std::fmt;

/// Lifecycle of the results panel across one check.
///
/// `Idle → Validating → (Rejected | Requesting) → (Rendered | RequestFailed)`.
/// Each trigger restarts at `Validating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Idle,
    Validating,
    Rejected,
    Requesting,
    Rendered,
    RequestFailed,
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PanelState::Idle => "idle",
            PanelState::Validating => "validating",
            PanelState::Rejected => "rejected",
            PanelState::Requesting => "requesting",
            PanelState::Rendered => "rendered",
            PanelState::RequestFailed => "request-failed",
        };
        f.write_str(name)
    }
}

/// ResultsPanel port for the container that shows check outcomes
///
/// The panel is a single-writer resource. Every `show` replaces the content
/// wholesale and re-binds the detail toggles found in the new fragment.
pub trait ResultsPanel: Send + Sync {
    /// Clears content and toggle bindings and enters `state`
    fn begin(&self, state: PanelState);

    /// Replaces the content with `fragment`, binds its toggles and enters `state`
    fn show(&self, fragment: RenderedFragment, state: PanelState);

    fn state(&self) -> PanelState;

    /// Current HTML content
    fn html(&self) -> String;

    /// Flips the detail panel bound to `toggle_id`. Returns the new visibility,
    /// or `None` when no such toggle is bound.
    fn click_toggle(&self, toggle_id: &str) -> Option<bool>;

    /// Visibility of the detail panel bound to `toggle_id`
    fn is_detail_visible(&self, toggle_id: &str) -> Option<bool>;
}
