use crate::compatibility::domain::{
    BottleneckAnalysis, CompatibilityResult, DetailValue, PowerAnalysis, Verdict,
};
use crate::compatibility::policies::MessageClassification;
use crate::ports::outbound::{RenderedFragment, ResultRenderer};
use crate::shared::html::{escape_html, format_number};
use uuid::Uuid;

/// Shown wherever a detail value is missing
const PLACEHOLDER: &str = "—";

/// Banner text when the server gives no message
const DEFAULT_OK_MESSAGE: &str = "All components are compatible.";
const DEFAULT_BAD_MESSAGE: &str = "Incompatible build";

/// HtmlResultRenderer adapter for the results panel
///
/// Implements the ResultRenderer port. Sections appear in a fixed order:
/// banner, issues, power analysis, bottleneck analysis, warnings. Sections
/// whose field is absent are skipped.
///
/// Bottleneck details sit in a hidden panel behind a toggle. The toggle id
/// is generated per render so ids never collide across re-renders.
pub struct HtmlResultRenderer {
    id_source: fn() -> String,
}

impl HtmlResultRenderer {
    pub fn new() -> Self {
        Self {
            id_source: || Uuid::new_v4().simple().to_string(),
        }
    }

    /// Renderer with a deterministic toggle id source
    pub fn with_id_source(id_source: fn() -> String) -> Self {
        Self { id_source }
    }

    fn render_message_log(lines: &[String]) -> String {
        lines
            .iter()
            .map(|line| {
                format!(
                    "<div class=\"result-line {}\">{}</div>",
                    MessageClassification::classify(line).css_class(),
                    escape_html(line)
                )
            })
            .collect()
    }

    fn render_verdict(&self, verdict: &Verdict, output: &mut String) -> Vec<String> {
        let mut toggle_ids = Vec::new();

        Self::render_banner(verdict, output);
        if let Some(issues) = &verdict.issues {
            Self::render_issues(issues, output);
        }
        if let Some(power) = &verdict.power_analysis {
            Self::render_power_analysis(power, output);
        }
        if let Some(bottleneck) = &verdict.bottleneck_analysis {
            let toggle_id = format!("bottleneck-details-{}", (self.id_source)());
            Self::render_bottleneck_analysis(bottleneck, &toggle_id, output);
            toggle_ids.push(toggle_id);
        }
        if let Some(warnings) = &verdict.warnings {
            Self::render_warnings(warnings, output);
        }

        toggle_ids
    }

    fn render_banner(verdict: &Verdict, output: &mut String) {
        let (class, glyph, fallback) = if verdict.compatible {
            ("ok", "✔", DEFAULT_OK_MESSAGE)
        } else {
            ("bad", "❌", DEFAULT_BAD_MESSAGE)
        };
        let message = verdict.message.as_deref().unwrap_or(fallback);
        output.push_str(&format!(
            "<div class=\"result-banner {}\">{} {}</div>",
            class,
            glyph,
            escape_html(message)
        ));
    }

    fn render_issues(issues: &[String], output: &mut String) {
        output.push_str("<div class=\"result-section issues\"><h4>Issues</h4>");
        for issue in issues {
            output.push_str(&format!(
                "<div class=\"result-line bad\">❌ {}</div>",
                escape_html(issue)
            ));
        }
        output.push_str("</div>");
    }

    fn render_power_analysis(power: &PowerAnalysis, output: &mut String) {
        let watts = |value: Option<f64>| {
            value
                .map(|w| format!("{}W", format_number(w)))
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        };
        let margin_class = match power.margin_is_positive() {
            Some(true) => "margin positive",
            Some(false) => "margin negative",
            None => "margin",
        };

        output.push_str("<div class=\"result-section power-analysis\"><h4>Power analysis</h4>");
        output.push_str("<table class=\"power-table\">");
        for (label, value) in [
            ("GPU power (TDP)", power.gpu_power_tdp),
            ("CPU power (TDP)", power.cpu_power_tdp),
            ("Total estimated", power.total_estimated),
            ("PSU available", power.psu_available),
        ] {
            output.push_str(&format!(
                "<tr><th>{}</th><td>{}</td></tr>",
                label,
                watts(value)
            ));
        }
        output.push_str(&format!(
            "<tr><th>Margin</th><td class=\"{}\">{}</td></tr>",
            margin_class,
            watts(power.margin)
        ));
        output.push_str("</table></div>");
    }

    fn render_bottleneck_analysis(
        bottleneck: &BottleneckAnalysis,
        toggle_id: &str,
        output: &mut String,
    ) {
        let detail = |value: &Option<DetailValue>, unit: &str| match value {
            Some(v) if v.is_number() && !unit.is_empty() => {
                format!("{} {}", escape_html(v.as_str()), unit)
            }
            Some(v) => escape_html(v.as_str()),
            None => PLACEHOLDER.to_string(),
        };
        let details = &bottleneck.details;

        output.push_str(
            "<div class=\"result-section bottleneck-analysis\"><h4>Bottleneck analysis</h4>",
        );
        output.push_str(&format!(
            "<div class=\"result-line\">{}</div>",
            bottleneck
                .summary
                .as_deref()
                .map(escape_html)
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        ));
        output.push_str(&format!(
            "<button type=\"button\" class=\"details-toggle\" data-target=\"{id}\" aria-controls=\"{id}\" aria-expanded=\"false\">Show details</button>",
            id = toggle_id
        ));
        output.push_str(&format!(
            "<div id=\"{}\" class=\"bottleneck-details\" hidden><ul>",
            toggle_id
        ));
        for (label, value) in [
            ("CPU cores", detail(&details.cpu_cores, "")),
            ("CPU boost", detail(&details.cpu_boost_ghz, "GHz")),
            ("CPU TDP", detail(&details.cpu_tdp, "W")),
            ("GPU TDP", detail(&details.gpu_tdp, "W")),
            ("Note", detail(&details.note, "")),
        ] {
            output.push_str(&format!("<li><strong>{}:</strong> {}</li>", label, value));
        }
        output.push_str("</ul></div></div>");
    }

    fn render_warnings(warnings: &[String], output: &mut String) {
        output.push_str("<div class=\"result-section warnings\"><h4>Warnings</h4>");
        for warning in warnings {
            output.push_str(&format!(
                "<div class=\"result-line warn\">⚠ {}</div>",
                escape_html(warning)
            ));
        }
        output.push_str("</div>");
    }
}

impl Default for HtmlResultRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultRenderer for HtmlResultRenderer {
    fn render(&self, result: &CompatibilityResult) -> RenderedFragment {
        match result {
            CompatibilityResult::MessageLog(lines) => {
                RenderedFragment::static_html(Self::render_message_log(lines))
            }
            CompatibilityResult::Verdict(verdict) => {
                let mut html = String::new();
                let toggle_ids = self.render_verdict(verdict, &mut html);
                RenderedFragment { html, toggle_ids }
            }
        }
    }

    fn render_notice(&self, text: &str, ok: bool) -> RenderedFragment {
        RenderedFragment::static_html(format!(
            "<div class=\"{}\">{}</div>",
            if ok { "ok" } else { "bad" },
            escape_html(text)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::domain::BottleneckDetails;

    fn renderer() -> HtmlResultRenderer {
        HtmlResultRenderer::with_id_source(|| "fixed".to_string())
    }

    fn power(margin: f64) -> PowerAnalysis {
        PowerAnalysis {
            gpu_power_tdp: Some(300.0),
            cpu_power_tdp: Some(125.0),
            total_estimated: Some(425.0),
            psu_available: Some(750.0),
            margin: Some(margin),
        }
    }

    #[test]
    fn test_message_log_lines_are_classified() {
        let result = CompatibilityResult::MessageLog(vec![
            "✔ all good".to_string(),
            "Compatible power supply".to_string(),
            "❌ insufficient wattage".to_string(),
            "random text".to_string(),
        ]);
        let fragment = renderer().render(&result);
        assert_eq!(
            fragment.html,
            "<div class=\"result-line ok\">✔ all good</div>\
             <div class=\"result-line ok\">Compatible power supply</div>\
             <div class=\"result-line bad\">❌ insufficient wattage</div>\
             <div class=\"result-line bad\">random text</div>"
        );
        assert!(fragment.toggle_ids.is_empty());
    }

    #[test]
    fn test_empty_message_log_renders_nothing() {
        let fragment = renderer().render(&CompatibilityResult::MessageLog(vec![]));
        assert!(fragment.html.is_empty());
    }

    #[test]
    fn test_minimal_verdict_renders_only_banner() {
        let html = renderer()
            .render(&CompatibilityResult::Verdict(Verdict::new(false)))
            .html;
        assert_eq!(
            html,
            "<div class=\"result-banner bad\">❌ Incompatible build</div>"
        );
    }

    #[test]
    fn test_ok_banner_with_message() {
        let verdict = Verdict {
            message: Some("All good".to_string()),
            ..Verdict::new(true)
        };
        let html = renderer().render(&CompatibilityResult::Verdict(verdict)).html;
        assert!(html.contains("<div class=\"result-banner ok\">✔ All good</div>"));
    }

    #[test]
    fn test_power_analysis_positive_margin() {
        let verdict = Verdict {
            power_analysis: Some(power(325.0)),
            ..Verdict::new(true)
        };
        let html = renderer().render(&CompatibilityResult::Verdict(verdict)).html;
        assert!(html.contains("<tr><th>GPU power (TDP)</th><td>300W</td></tr>"));
        assert!(html.contains("<tr><th>Total estimated</th><td>425W</td></tr>"));
        assert!(html.contains("<td class=\"margin positive\">325W</td>"));
        assert_eq!(html.matches("<tr>").count(), 5);
    }

    #[test]
    fn test_power_analysis_negative_margin() {
        let verdict = Verdict {
            power_analysis: Some(power(-75.0)),
            ..Verdict::new(false)
        };
        let html = renderer().render(&CompatibilityResult::Verdict(verdict)).html;
        assert!(html.contains("<td class=\"margin negative\">-75W</td>"));
    }

    #[test]
    fn test_power_analysis_missing_figures_use_placeholder() {
        let verdict = Verdict {
            power_analysis: Some(PowerAnalysis::default()),
            ..Verdict::new(true)
        };
        let html = renderer().render(&CompatibilityResult::Verdict(verdict)).html;
        assert!(html.contains("<td class=\"margin\">—</td>"));
        assert_eq!(html.matches("<tr>").count(), 5);
    }

    #[test]
    fn test_bottleneck_section_has_hidden_toggle() {
        let verdict = Verdict {
            bottleneck_analysis: Some(BottleneckAnalysis {
                summary: Some("GPU-bound".to_string()),
                details: BottleneckDetails {
                    cpu_cores: Some(DetailValue::Number("8".to_string())),
                    cpu_boost_ghz: Some(DetailValue::Number("5.0".to_string())),
                    ..BottleneckDetails::default()
                },
            }),
            ..Verdict::new(true)
        };
        let fragment = renderer().render(&CompatibilityResult::Verdict(verdict));

        assert_eq!(fragment.toggle_ids, vec!["bottleneck-details-fixed"]);
        assert!(fragment
            .html
            .contains("data-target=\"bottleneck-details-fixed\""));
        assert!(fragment
            .html
            .contains("<div id=\"bottleneck-details-fixed\" class=\"bottleneck-details\" hidden>"));
        assert!(fragment.html.contains("<li><strong>CPU cores:</strong> 8</li>"));
        assert!(fragment
            .html
            .contains("<li><strong>CPU boost:</strong> 5.0 GHz</li>"));
        assert!(fragment.html.contains("<li><strong>GPU TDP:</strong> —</li>"));
        assert!(fragment.html.contains("<li><strong>Note:</strong> —</li>"));
    }

    #[test]
    fn test_text_details_keep_their_own_units() {
        let verdict = Verdict {
            bottleneck_analysis: Some(BottleneckAnalysis {
                summary: None,
                details: BottleneckDetails {
                    cpu_boost_ghz: Some(DetailValue::Text("5.4 GHz".to_string())),
                    cpu_tdp: Some(DetailValue::Number("125".to_string())),
                    gpu_tdp: Some(DetailValue::Text("300W".to_string())),
                    ..BottleneckDetails::default()
                },
            }),
            ..Verdict::new(true)
        };
        let html = renderer().render(&CompatibilityResult::Verdict(verdict)).html;

        assert!(html.contains("<li><strong>CPU boost:</strong> 5.4 GHz</li>"));
        assert!(!html.contains("GHz GHz"));
        assert!(html.contains("<li><strong>CPU TDP:</strong> 125 W</li>"));
        assert!(html.contains("<li><strong>GPU TDP:</strong> 300W</li>"));
    }

    #[test]
    fn test_default_toggle_ids_are_unique_per_render() {
        let renderer = HtmlResultRenderer::new();
        let verdict = CompatibilityResult::Verdict(Verdict {
            bottleneck_analysis: Some(BottleneckAnalysis::default()),
            ..Verdict::new(true)
        });
        let first = renderer.render(&verdict).toggle_ids;
        let second = renderer.render(&verdict).toggle_ids;
        assert_ne!(first, second);
    }

    #[test]
    fn test_section_order() {
        let verdict = Verdict {
            compatible: false,
            message: Some("Problems found".to_string()),
            issues: Some(vec!["Socket mismatch".to_string()]),
            power_analysis: Some(power(10.0)),
            bottleneck_analysis: Some(BottleneckAnalysis::default()),
            warnings: Some(vec!["Tight margin".to_string()]),
        };
        let html = renderer().render(&CompatibilityResult::Verdict(verdict)).html;

        let banner = html.find("result-banner").unwrap();
        let issues = html.find("issues").unwrap();
        let power = html.find("power-analysis").unwrap();
        let bottleneck = html.find("bottleneck-analysis").unwrap();
        let warnings = html.find("warnings").unwrap();
        assert!(banner < issues && issues < power && power < bottleneck && bottleneck < warnings);
        assert!(html.contains("<div class=\"result-line bad\">❌ Socket mismatch</div>"));
        assert!(html.contains("<div class=\"result-line warn\">⚠ Tight margin</div>"));
    }

    #[test]
    fn test_untrusted_text_is_escaped() {
        let verdict = Verdict {
            message: Some("<img src=x onerror=alert(1)>".to_string()),
            issues: Some(vec!["<b>bold</b>".to_string()]),
            warnings: Some(vec!["\"quoted\" & more".to_string()]),
            bottleneck_analysis: Some(BottleneckAnalysis {
                summary: Some("<script>".to_string()),
                details: BottleneckDetails {
                    note: Some(DetailValue::Text("<i>".to_string())),
                    ..BottleneckDetails::default()
                },
            }),
            ..Verdict::new(true)
        };
        let html = renderer().render(&CompatibilityResult::Verdict(verdict)).html;
        assert!(!html.contains("<img"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<i>"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("&quot;quoted&quot; &amp; more"));
    }

    #[test]
    fn test_message_log_is_escaped() {
        let html = renderer()
            .render(&CompatibilityResult::MessageLog(vec![
                "<script>compatible</script>".to_string(),
            ]))
            .html;
        assert_eq!(
            html,
            "<div class=\"result-line ok\">&lt;script&gt;compatible&lt;/script&gt;</div>"
        );
    }

    #[test]
    fn test_render_notice() {
        let fragment = renderer().render_notice("Select all <components>", false);
        assert_eq!(
            fragment.html,
            "<div class=\"bad\">Select all &lt;components&gt;</div>"
        );
        assert!(fragment.toggle_ids.is_empty());
    }
}
