use crate::application::dto::CheckOutcome;
use crate::application::page_context::PageContext;
use crate::compatibility::domain::CompatibilityResult;
use crate::compatibility::services::ResultInterpreter;
use crate::ports::outbound::{HttpResponse, HttpTransport, PanelState, ResultRenderer};
use crate::shared::error::CheckerError;

/// Notice shown when the check is triggered with an incomplete selection
pub const VALIDATION_MESSAGE: &str = "Select all components before checking.";

const FAILURE_PREFIX: &str = "Error contacting the server";

/// CheckCompatibilityUseCase - handles one press of the check trigger
///
/// Reads the selection, validates it, queries the backend and writes the
/// rendered outcome into the results panel of the context.
///
/// # Type Parameters
/// * `T` - HttpTransport implementation
/// * `R` - ResultRenderer implementation
pub struct CheckCompatibilityUseCase<T, R> {
    transport: T,
    renderer: R,
}

impl<T, R> CheckCompatibilityUseCase<T, R>
where
    T: HttpTransport,
    R: ResultRenderer,
{
    pub fn new(transport: T, renderer: R) -> Self {
        Self {
            transport,
            renderer,
        }
    }

    /// Runs one check against the current widget values.
    ///
    /// Nothing is propagated: every failure ends up rendered in the panel
    /// and reported through the returned outcome.
    pub async fn execute(&self, context: &PageContext) -> CheckOutcome {
        let panel = context.results();
        panel.begin(PanelState::Validating);

        let selection = context.read_selection();
        if !selection.is_complete() {
            let missing = selection.missing();
            tracing::info!(?missing, "selection incomplete; check not sent");
            panel.show(
                self.renderer.render_notice(VALIDATION_MESSAGE, false),
                PanelState::Rejected,
            );
            return CheckOutcome::Rejected { missing };
        }

        panel.begin(PanelState::Requesting);
        let url = context.endpoints().check_url(&selection);

        match self.request(&url).await {
            Ok(result) => {
                panel.show(self.renderer.render(&result), PanelState::Rendered);
                CheckOutcome::Rendered(result)
            }
            Err(reason) => {
                tracing::error!(url = %url, reason = %reason, "compatibility check failed");
                let message = format!("{}: {}", FAILURE_PREFIX, reason);
                panel.show(
                    self.renderer.render_notice(&message, false),
                    PanelState::RequestFailed,
                );
                CheckOutcome::RequestFailed { message }
            }
        }
    }

    /// Performs the request and interprets the body. The error side is the
    /// text to show after the failure prefix.
    async fn request(&self, url: &str) -> Result<CompatibilityResult, String> {
        let response = self.transport.get(url).await.map_err(failure_reason)?;
        if !response.is_success() {
            return Err(server_error_message(&response));
        }

        let body = response.json(url).map_err(failure_reason)?;
        ResultInterpreter::interpret(&body).map_err(failure_reason)
    }
}

fn failure_reason(error: CheckerError) -> String {
    match error {
        CheckerError::Transport { details, .. } | CheckerError::Decode { details, .. } => details,
        other => other.to_string(),
    }
}

/// Best available description of a non-2xx response: the `error` field of a
/// JSON body, else the status text. Empty or falsy `error` values (`""`,
/// `false`, `0`, `null`) count as absent.
fn server_error_message(response: &HttpResponse) -> String {
    serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|body| body.get("error").and_then(error_text))
        .unwrap_or_else(|| response.status_text.clone())
}

fn error_text(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::HtmlResultRenderer;
    use crate::adapters::outbound::page::{ChoicesWidget, InMemoryResultsPanel, WidgetOptions};
    use crate::application::dto::Endpoints;
    use crate::compatibility::domain::{ComponentCategory, ComponentOption};
    use crate::ports::outbound::SelectWidget;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct StubTransport {
        response: Result<HttpResponse, CheckerError>,
        requests: Mutex<Vec<String>>,
    }

    impl StubTransport {
        fn answering(response: HttpResponse) -> Self {
            Self {
                response: Ok(response),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(CheckerError::Transport {
                    url: "/api/check-compatibility".to_string(),
                    details: "connection refused".to_string(),
                }),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn get(&self, path: &str) -> Result<HttpResponse, CheckerError> {
            self.requests.lock().unwrap().push(path.to_string());
            match &self.response {
                Ok(response) => Ok(response.clone()),
                Err(CheckerError::Transport { url, details }) => Err(CheckerError::Transport {
                    url: url.clone(),
                    details: details.clone(),
                }),
                Err(other) => Err(CheckerError::UnrecognizedResponse {
                    details: other.to_string(),
                }),
            }
        }
    }

    fn fixed_id() -> String {
        "fixed".to_string()
    }

    fn context_with(values: &[(ComponentCategory, &str)]) -> PageContext {
        let mut context =
            PageContext::new(Endpoints::new(), Arc::new(InMemoryResultsPanel::new()));
        for category in ComponentCategory::ALL {
            let widget = ChoicesWidget::new(category.control_id(), WidgetOptions::default());
            if let Some((_, value)) = values.iter().find(|(c, _)| *c == category) {
                if !value.is_empty() {
                    widget.replace_choices(vec![ComponentOption::uniform(*value)]);
                    widget.select(value);
                }
            }
            context = context.with_widget(category, Arc::new(widget));
        }
        context
    }

    fn full_context() -> PageContext {
        context_with(&[
            (ComponentCategory::Cpu, "i7"),
            (ComponentCategory::Gpu, "rtx4070"),
            (ComponentCategory::Motherboard, "Z790"),
            (ComponentCategory::Memory, "ddr5"),
            (ComponentCategory::Psu, "750w"),
        ])
    }

    fn use_case(
        transport: StubTransport,
    ) -> CheckCompatibilityUseCase<StubTransport, HtmlResultRenderer> {
        CheckCompatibilityUseCase::new(transport, HtmlResultRenderer::with_id_source(fixed_id))
    }

    #[tokio::test]
    async fn test_incomplete_selection_sends_no_request() {
        let context = context_with(&[
            (ComponentCategory::Cpu, "i7"),
            (ComponentCategory::Gpu, ""),
            (ComponentCategory::Motherboard, "Z790"),
            (ComponentCategory::Memory, "ddr5"),
            (ComponentCategory::Psu, "750w"),
        ]);
        let checker = use_case(StubTransport::answering(HttpResponse::ok("{}")));

        let outcome = checker.execute(&context).await;

        assert_eq!(
            outcome,
            CheckOutcome::Rejected {
                missing: vec![ComponentCategory::Gpu]
            }
        );
        assert!(checker.transport.requests().is_empty());
        assert_eq!(context.results().state(), PanelState::Rejected);
        assert!(context.results().html().contains(VALIDATION_MESSAGE));
    }

    #[tokio::test]
    async fn test_compatible_verdict_with_power_analysis() {
        let body = r#"{
            "compatible": true,
            "message": "All good",
            "power_analysis": {
                "gpu_power_tdp": 300, "cpu_power_tdp": 125, "total_estimated": 425,
                "psu_available": 750, "margin": 325
            }
        }"#;
        let context = full_context();
        let checker = use_case(StubTransport::answering(HttpResponse::ok(body)));

        let outcome = checker.execute(&context).await;

        assert!(outcome.is_compatible());
        let html = context.results().html();
        assert!(html.contains("✔ All good"));
        assert!(html.contains(r#"<td class="margin positive">325W</td>"#));
        assert_eq!(context.results().state(), PanelState::Rendered);
        assert_eq!(
            checker.transport.requests(),
            vec!["/api/check-compatibility?cpu=i7&gpu=rtx4070&motherboard=Z790&memory=ddr5&psu=750w"]
        );
    }

    #[tokio::test]
    async fn test_message_log_is_rendered() {
        let body = r#"{"messages": ["✔ CPU fits socket", "❌ insufficient wattage"]}"#;
        let context = full_context();
        let checker = use_case(StubTransport::answering(HttpResponse::ok(body)));

        let outcome = checker.execute(&context).await;

        assert!(!outcome.is_compatible());
        let html = context.results().html();
        assert!(html.contains(r#"<div class="result-line ok">✔ CPU fits socket</div>"#));
        assert!(html.contains(r#"<div class="result-line bad">❌ insufficient wattage</div>"#));
    }

    #[tokio::test]
    async fn test_server_error_uses_error_field() {
        let context = full_context();
        let checker = use_case(StubTransport::answering(HttpResponse::new(
            400,
            "Bad Request",
            r#"{"error": "Unknown GPU"}"#,
        )));

        let outcome = checker.execute(&context).await;

        assert_eq!(
            outcome,
            CheckOutcome::RequestFailed {
                message: "Error contacting the server: Unknown GPU".to_string()
            }
        );
        assert_eq!(context.results().state(), PanelState::RequestFailed);
        assert!(context
            .results()
            .html()
            .contains("Error contacting the server: Unknown GPU"));
    }

    #[tokio::test]
    async fn test_server_error_falls_back_to_status_text() {
        let context = full_context();
        let checker = use_case(StubTransport::answering(HttpResponse::new(
            502,
            "Bad Gateway",
            "<html>",
        )));

        let outcome = checker.execute(&context).await;

        assert_eq!(
            outcome,
            CheckOutcome::RequestFailed {
                message: "Error contacting the server: Bad Gateway".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_rendered() {
        let context = full_context();
        let checker = use_case(StubTransport::failing());

        let outcome = checker.execute(&context).await;

        match outcome {
            CheckOutcome::RequestFailed { message } => {
                assert!(message.starts_with("Error contacting the server: "));
                assert!(message.contains("connection refused"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_bottleneck_toggle_is_bound() {
        let body = r#"{
            "compatible": true,
            "bottleneck_analysis": {"summary": "GPU bound", "details": {"cpu_cores": 8}}
        }"#;
        let context = full_context();
        let checker = use_case(StubTransport::answering(HttpResponse::ok(body)));

        checker.execute(&context).await;

        let toggle = "bottleneck-details-fixed";
        let panel = context.results();
        assert_eq!(panel.is_detail_visible(toggle), Some(false));
        assert_eq!(panel.click_toggle(toggle), Some(true));
        assert_eq!(panel.click_toggle(toggle), Some(false));
    }

    #[tokio::test]
    async fn test_new_check_replaces_previous_content() {
        let context = full_context();
        let checker = use_case(StubTransport::answering(HttpResponse::ok(
            r#"{"compatible": false, "message": "PSU too small"}"#,
        )));
        checker.execute(&context).await;
        assert!(context.results().html().contains("PSU too small"));

        let widget = context.widget(ComponentCategory::Cpu).unwrap();
        widget.replace_choices(Vec::new());
        checker.execute(&context).await;

        let html = context.results().html();
        assert!(!html.contains("PSU too small"));
        assert!(html.contains(VALIDATION_MESSAGE));
    }

    #[test]
    fn test_server_error_message_without_status_text() {
        let response = HttpResponse::new(500, "", "");
        assert_eq!(server_error_message(&response), "");
    }

    #[test]
    fn test_empty_error_field_falls_back_to_status_text() {
        for body in [
            r#"{"error": ""}"#,
            r#"{"error": "   "}"#,
            r#"{"error": false}"#,
            r#"{"error": 0}"#,
            r#"{"error": null}"#,
        ] {
            let response = HttpResponse::new(500, "Internal Server Error", body);
            assert_eq!(
                server_error_message(&response),
                "Internal Server Error",
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn test_non_string_error_field_is_kept() {
        let response = HttpResponse::new(400, "Bad Request", r#"{"error": 42}"#);
        assert_eq!(server_error_message(&response), "42");
    }
}
