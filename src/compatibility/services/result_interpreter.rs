use crate::compatibility::domain::{
    BottleneckAnalysis, CompatibilityResult, PowerAnalysis, Verdict,
};
use crate::shared::error::CheckerError;
use serde_json::{Map, Value};

/// A shape detector: inspects a decoded response body and claims it when the
/// fields it recognizes are present.
type ShapeDetector = fn(&Map<String, Value>) -> Option<CompatibilityResult>;

/// ResultInterpreter service for compatibility responses
///
/// Detectors are tried in order; the first one that claims the body decides
/// the shape. New shapes are supported by adding a detector ahead of the
/// structured verdict, which accepts any object.
pub struct ResultInterpreter;

impl ResultInterpreter {
    const DETECTORS: &'static [(&'static str, ShapeDetector)] = &[
        ("message log", detect_message_log),
        ("verdict", detect_verdict),
    ];

    /// Interprets a decoded response body
    ///
    /// # Errors
    /// Returns `CheckerError::UnrecognizedResponse` when the body is not a JSON object
    pub fn interpret(body: &Value) -> Result<CompatibilityResult, CheckerError> {
        let object = body
            .as_object()
            .ok_or_else(|| CheckerError::UnrecognizedResponse {
                details: format!("expected a JSON object, got {}", json_kind(body)),
            })?;

        Self::DETECTORS
            .iter()
            .find_map(|(shape, detect)| {
                detect(object).inspect(|_| tracing::debug!(shape, "compatibility response shape"))
            })
            .ok_or_else(|| CheckerError::UnrecognizedResponse {
                details: "no known response shape matched".to_string(),
            })
    }
}

fn detect_message_log(object: &Map<String, Value>) -> Option<CompatibilityResult> {
    let messages = object.get("messages")?.as_array()?;
    let lines = messages.iter().map(line_text).collect();
    Some(CompatibilityResult::MessageLog(lines))
}

fn detect_verdict(object: &Map<String, Value>) -> Option<CompatibilityResult> {
    let compatible = object
        .get("compatible")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let message = text_field(object, "message").or_else(|| text_field(object, "reason"));

    Some(CompatibilityResult::Verdict(Verdict {
        compatible,
        message,
        issues: string_list(object, "issues"),
        power_analysis: object
            .get("power_analysis")
            .and_then(PowerAnalysis::from_value),
        bottleneck_analysis: object
            .get("bottleneck_analysis")
            .and_then(BottleneckAnalysis::from_value),
        warnings: string_list(object, "warnings"),
    }))
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn string_list(object: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(line_text).collect())
}

/// Strings pass through; other JSON values keep their JSON text.
fn line_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
