use super::ComponentCategory;
use std::collections::BTreeMap;

/// The five current selections read from the form.
///
/// A category is considered selected only when its value is non-empty;
/// whitespace-only values count as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    values: BTreeMap<ComponentCategory, String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for a category, replacing any previous one
    pub fn with(mut self, category: ComponentCategory, value: impl Into<String>) -> Self {
        self.set(category, value);
        self
    }

    fn set(&mut self, category: ComponentCategory, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.values.remove(&category);
        } else {
            self.values.insert(category, value);
        }
    }

    pub fn get(&self, category: ComponentCategory) -> Option<&str> {
        self.values.get(&category).map(String::as_str)
    }

    /// Categories with no value, in query-string order
    pub fn missing(&self) -> Vec<ComponentCategory> {
        ComponentCategory::ALL
            .into_iter()
            .filter(|category| !self.values.contains_key(category))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Builds the compatibility query string (`cpu=..&gpu=..&...`).
    ///
    /// Parameters always appear in the fixed category order; values are
    /// percent-encoded. Unset categories are emitted with an empty value.
    pub fn query_string(&self) -> String {
        ComponentCategory::ALL
            .iter()
            .map(|category| {
                format!(
                    "{}={}",
                    category.query_param(),
                    urlencoding::encode(self.get(*category).unwrap_or(""))
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
