use crate::compatibility::domain::ComponentOption;
use crate::ports::outbound::SelectWidget;
use serde::Deserialize;
use std::sync::{Mutex, MutexGuard};

/// Configuration recognized by the searchable-select widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    /// Allow free-text filtering of options
    pub search_enabled: bool,
    /// Prompt shown next to a highlighted option
    pub item_select_text: String,
    /// Cap on the number of filtered results shown
    pub search_result_limit: usize,
    /// Sort options alphabetically instead of keeping the caller's order
    pub should_sort: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            search_enabled: true,
            item_select_text: "Press to select".to_string(),
            search_result_limit: 100,
            should_sort: false,
        }
    }
}

#[derive(Debug, Default)]
struct WidgetState {
    choices: Vec<ComponentOption>,
    selected: Option<String>,
}

/// ChoicesWidget adapter: an in-memory searchable select
///
/// Holds the option list and the current selection behind a mutex so the
/// list loader and the checker can share one handle.
#[derive(Debug)]
pub struct ChoicesWidget {
    control_id: String,
    options: WidgetOptions,
    state: Mutex<WidgetState>,
}

impl ChoicesWidget {
    pub fn new(control_id: impl Into<String>, options: WidgetOptions) -> Self {
        Self {
            control_id: control_id.into(),
            options,
            state: Mutex::new(WidgetState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, WidgetState> {
        // Poisoning is ignored: the option list is only ever replaced wholesale.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn ordered(&self, mut options: Vec<ComponentOption>) -> Vec<ComponentOption> {
        if self.options.should_sort {
            options.sort_by(|a, b| a.label().to_lowercase().cmp(&b.label().to_lowercase()));
        }
        options
    }
}

impl SelectWidget for ChoicesWidget {
    fn replace_choices(&self, options: Vec<ComponentOption>) {
        let options = self.ordered(options);
        let mut state = self.lock();
        let keep_selection = state
            .selected
            .as_ref()
            .is_some_and(|selected| options.iter().any(|o| o.value() == selected));
        if !keep_selection {
            state.selected = None;
        }
        tracing::debug!(
            control = %self.control_id,
            count = options.len(),
            kept_selection = keep_selection,
            "options replaced"
        );
        state.choices = options;
    }

    fn choices(&self) -> Vec<ComponentOption> {
        self.lock().choices.clone()
    }

    fn selected_value(&self) -> Option<String> {
        self.lock().selected.clone()
    }

    fn select(&self, value_or_label: &str) -> bool {
        let mut state = self.lock();
        let wanted = value_or_label.trim();
        let found = state
            .choices
            .iter()
            .find(|o| o.value() == wanted)
            .or_else(|| {
                state
                    .choices
                    .iter()
                    .find(|o| o.label().eq_ignore_ascii_case(wanted))
            })
            .map(|o| o.value().to_string());

        match found {
            Some(value) => {
                state.selected = Some(value);
                true
            }
            None => false,
        }
    }

    fn search(&self, query: &str) -> Vec<ComponentOption> {
        let state = self.lock();
        let query = query.trim().to_lowercase();
        let filter = self.options.search_enabled && !query.is_empty();
        state
            .choices
            .iter()
            .filter(|o| !filter || o.label().to_lowercase().contains(&query))
            .take(self.options.search_result_limit)
            .cloned()
            .collect()
    }

    fn prompt(&self) -> &str {
        &self.options.item_select_text
    }
}
