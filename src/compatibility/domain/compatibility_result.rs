use super::{BottleneckAnalysis, PowerAnalysis};

/// The server's verdict on a chosen set of components.
///
/// Servers have answered in several shapes over time. The variant is chosen by
/// field presence (see `ResultInterpreter`), never by a version tag.
#[derive(Debug, Clone, PartialEq)]
pub enum CompatibilityResult {
    /// Oldest shape: a flat list of human-readable lines
    MessageLog(Vec<String>),
    /// Structured verdict; covers both the plain and the bottleneck-aware shapes
    Verdict(Verdict),
}

/// Structured verdict. Only `compatible` is mandatory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Verdict {
    pub compatible: bool,
    pub message: Option<String>,
    pub issues: Option<Vec<String>>,
    pub power_analysis: Option<PowerAnalysis>,
    pub bottleneck_analysis: Option<BottleneckAnalysis>,
    pub warnings: Option<Vec<String>>,
}

impl Verdict {
    pub fn new(compatible: bool) -> Self {
        Self {
            compatible,
            ..Self::default()
        }
    }
}

impl CompatibilityResult {
    /// Overall indicator. A message log counts as compatible only when every
    /// line is classified ok.
    pub fn is_compatible(&self) -> bool {
        match self {
            CompatibilityResult::MessageLog(lines) => {
                use crate::compatibility::policies::MessageClassification;
                lines
                    .iter()
                    .all(|line| MessageClassification::classify(line).is_ok())
            }
            CompatibilityResult::Verdict(verdict) => verdict.compatible,
        }
    }
}
