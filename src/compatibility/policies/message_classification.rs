/// Status of a single rendered result line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    Ok,
    Bad,
}

impl LineStatus {
    pub fn is_ok(self) -> bool {
        matches!(self, LineStatus::Ok)
    }

    /// CSS class used by the results panel
    pub fn css_class(self) -> &'static str {
        match self {
            LineStatus::Ok => "ok",
            LineStatus::Bad => "bad",
        }
    }
}

/// MessageClassification policy for the flat `messages` response shape
///
/// A line is ok when it starts with the success glyph `✔` or contains
/// `compatible` in any letter case; every other line is bad.
///
/// NOTE: this is text matching on server prose. It is locale-specific and
/// "incompatible" also matches, so a line such as "Incompatible socket" is
/// classified ok. Kept as-is because existing visual results depend on it.
pub struct MessageClassification;

impl MessageClassification {
    const SUCCESS_GLYPH: char = '✔';
    const SUCCESS_WORD: &'static str = "compatible";

    pub fn classify(line: &str) -> LineStatus {
        if line.starts_with(Self::SUCCESS_GLYPH)
            || line.to_lowercase().contains(Self::SUCCESS_WORD)
        {
            LineStatus::Ok
        } else {
            LineStatus::Bad
        }
    }
}
