//! Renderable blocks produced from a raw assistant reply

use serde::Serialize;

/// Visual tone of a labeled section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Informational,
    Critical,
    Warning,
    Positive,
}

/// The labels the backend uses to open a section
///
/// [`SectionLabel::ALL`] is the matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionLabel {
    #[serde(rename = "Prediction:")]
    Prediction,
    #[serde(rename = "Churn Probability:")]
    ChurnProbability,
    #[serde(rename = "Risk Level:")]
    RiskLevel,
    #[serde(rename = "Alert:")]
    Alert,
    #[serde(rename = "Caution:")]
    Caution,
    #[serde(rename = "Good News:")]
    GoodNews,
    #[serde(rename = "Recommendations:")]
    Recommendations,
}

impl SectionLabel {
    pub const ALL: [SectionLabel; 7] = [
        SectionLabel::Prediction,
        SectionLabel::ChurnProbability,
        SectionLabel::RiskLevel,
        SectionLabel::Alert,
        SectionLabel::Caution,
        SectionLabel::GoodNews,
        SectionLabel::Recommendations,
    ];

    /// Literal label text as it appears between the emphasis markers
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionLabel::Prediction => "Prediction:",
            SectionLabel::ChurnProbability => "Churn Probability:",
            SectionLabel::RiskLevel => "Risk Level:",
            SectionLabel::Alert => "Alert:",
            SectionLabel::Caution => "Caution:",
            SectionLabel::GoodNews => "Good News:",
            SectionLabel::Recommendations => "Recommendations:",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            SectionLabel::Alert => Tone::Critical,
            SectionLabel::Caution => Tone::Warning,
            SectionLabel::GoodNews => Tone::Positive,
            SectionLabel::Prediction
            | SectionLabel::ChurnProbability
            | SectionLabel::RiskLevel
            | SectionLabel::Recommendations => Tone::Informational,
        }
    }
}

impl std::fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One renderable unit of an assistant reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Emphasis { text: String },
    Section { label: SectionLabel, tone: Tone },
    LineBreak,
    PlainText { text: String },
}

impl Block {
    pub fn plain(text: impl Into<String>) -> Self {
        Block::PlainText { text: text.into() }
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        Block::Emphasis { text: text.into() }
    }

    pub fn section(label: SectionLabel) -> Self {
        Block::Section {
            label,
            tone: label.tone(),
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self, Block::Section { .. })
    }
}

/// A section heading together with the blocks it governs
///
/// Blocks that precede the first section form a group without a heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGroup {
    pub heading: Option<SectionLabel>,
    pub body: Vec<Block>,
}

impl BlockGroup {
    pub fn tone(&self) -> Option<Tone> {
        self.heading.map(|label| label.tone())
    }
}
