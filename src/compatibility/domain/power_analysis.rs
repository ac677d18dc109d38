use serde_json::Value;

/// Power budget reported by the server, in watts.
///
/// Every figure is optional; an absent or non-numeric field is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PowerAnalysis {
    pub gpu_power_tdp: Option<f64>,
    pub cpu_power_tdp: Option<f64>,
    pub total_estimated: Option<f64>,
    pub psu_available: Option<f64>,
    pub margin: Option<f64>,
}

impl PowerAnalysis {
    /// Reads a power analysis object. Returns `None` when `value` is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let number = |key: &str| object.get(key).and_then(numeric);
        Some(Self {
            gpu_power_tdp: number("gpu_power_tdp"),
            cpu_power_tdp: number("cpu_power_tdp"),
            total_estimated: number("total_estimated"),
            psu_available: number("psu_available"),
            margin: number("margin"),
        })
    }

    /// Whether the margin is non-negative. `None` when no margin was reported.
    pub fn margin_is_positive(&self) -> Option<bool> {
        self.margin.map(|margin| margin >= 0.0)
    }
}

/// Accepts JSON numbers and numeric strings such as `"325"`.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
