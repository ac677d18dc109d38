use crate::compatibility::domain::{ComponentCategory, Selection};
use std::collections::BTreeMap;

/// Default path of the compatibility check endpoint
pub const DEFAULT_CHECK_ENDPOINT: &str = "/api/check-compatibility";

/// Backend endpoint paths used by the loaders and the checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    lists: BTreeMap<ComponentCategory, String>,
    check: String,
}

impl Endpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the list endpoint of one category
    pub fn with_list(mut self, category: ComponentCategory, path: impl Into<String>) -> Self {
        self.lists.insert(category, path.into());
        self
    }

    /// Overrides the check endpoint
    pub fn with_check(mut self, path: impl Into<String>) -> Self {
        self.check = path.into();
        self
    }

    pub fn list(&self, category: ComponentCategory) -> &str {
        self.lists
            .get(&category)
            .map(String::as_str)
            .unwrap_or_else(|| category.default_endpoint())
    }

    pub fn check(&self) -> &str {
        &self.check
    }

    /// Check endpoint with the selection as query string
    pub fn check_url(&self, selection: &Selection) -> String {
        let separator = if self.check.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.check, separator, selection.query_string())
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            lists: BTreeMap::new(),
            check: DEFAULT_CHECK_ENDPOINT.to_string(),
        }
    }
}
