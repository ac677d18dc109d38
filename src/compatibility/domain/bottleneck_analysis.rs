use crate::shared::html::format_number;
use serde_json::Value;

/// Advisory estimate of which component limits the build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BottleneckAnalysis {
    pub summary: Option<String>,
    pub details: BottleneckDetails,
}

/// Individual figures behind a bottleneck summary, kept as display text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BottleneckDetails {
    pub cpu_cores: Option<DetailValue>,
    pub cpu_boost_ghz: Option<DetailValue>,
    pub cpu_tdp: Option<DetailValue>,
    pub gpu_tdp: Option<DetailValue>,
    pub note: Option<DetailValue>,
}

/// A single detail figure. Only numbers take a unit suffix; text is shown as sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    Number(String),
    Text(String),
}

impl DetailValue {
    pub fn as_str(&self) -> &str {
        match self {
            DetailValue::Number(text) | DetailValue::Text(text) => text,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, DetailValue::Number(_))
    }
}

impl BottleneckAnalysis {
    /// Reads a bottleneck analysis object. Returns `None` when `value` is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let summary = object
            .get("summary")
            .and_then(detail_value)
            .map(|value| value.as_str().to_string());
        let details = object
            .get("details")
            .and_then(BottleneckDetails::from_value)
            .unwrap_or_default();
        Some(Self { summary, details })
    }
}

impl BottleneckDetails {
    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let text = |key: &str| object.get(key).and_then(detail_value);
        Some(Self {
            cpu_cores: text("cpu_cores"),
            cpu_boost_ghz: text("cpu_boost_ghz"),
            cpu_tdp: text("cpu_tdp"),
            gpu_tdp: text("gpu_tdp"),
            note: text("note"),
        })
    }
}

/// Numbers and non-empty strings become display text; anything else is absent.
fn detail_value(value: &Value) -> Option<DetailValue> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(DetailValue::Text(s.clone())),
        Value::Number(n) => n.as_f64().map(format_number).map(DetailValue::Number),
        _ => None,
    }
}
