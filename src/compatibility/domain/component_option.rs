/// A resolved `(value, label)` pair shown by a select widget.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentOption {
    value: String,
    label: String,
}

impl ComponentOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose value and label are the same text
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            label: text,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
