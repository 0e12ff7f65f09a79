use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Categorical interpretation of a MEC risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreLabel {
    /// Category 1.
    Safe,
    /// Category 2.
    GenerallySafe,
    /// Category 3.
    Caution,
    /// Category 4.
    NotRecommended,
    /// Any value outside 1–4, including missing cells.
    Unknown,
}

impl ScoreLabel {
    pub fn text(self) -> &'static str {
        match self {
            ScoreLabel::Safe => "Safe to use",
            ScoreLabel::GenerallySafe => "Generally safe, consult doctor",
            ScoreLabel::Caution => "Use with caution, consult doctor",
            ScoreLabel::NotRecommended => "Not recommended",
            ScoreLabel::Unknown => "Consult your doctor",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ScoreLabel::Safe => "✅",
            ScoreLabel::GenerallySafe => "🟨",
            ScoreLabel::Caution => "⚠️",
            ScoreLabel::NotRecommended => "❌",
            ScoreLabel::Unknown => "ℹ️",
        }
    }

    /// The MEC category this label stands for, if any.
    pub fn category(self) -> Option<u8> {
        match self {
            ScoreLabel::Safe => Some(1),
            ScoreLabel::GenerallySafe => Some(2),
            ScoreLabel::Caution => Some(3),
            ScoreLabel::NotRecommended => Some(4),
            ScoreLabel::Unknown => None,
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.text())
    }
}

/// Map a raw score to its label.
///
/// The raw value is compared exactly, without rounding, so `2.5` and NaN both
/// land on [`ScoreLabel::Unknown`].
pub fn interpret(score: f64) -> ScoreLabel {
    if score == 1.0 {
        ScoreLabel::Safe
    } else if score == 2.0 {
        ScoreLabel::GenerallySafe
    } else if score == 3.0 {
        ScoreLabel::Caution
    } else if score == 4.0 {
        ScoreLabel::NotRecommended
    } else {
        ScoreLabel::Unknown
    }
}

/// One line of the "Understanding Risk Scores" legend.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LegendEntry {
    pub category: u8,
    pub label: ScoreLabel,
    pub meaning: &'static str,
}

pub const LEGEND: [LegendEntry; 4] = [
    LegendEntry {
        category: 1,
        label: ScoreLabel::Safe,
        meaning: "No restriction (method can be used)",
    },
    LegendEntry {
        category: 2,
        label: ScoreLabel::GenerallySafe,
        meaning: "Advantages generally outweigh theoretical or proven risks",
    },
    LegendEntry {
        category: 3,
        label: ScoreLabel::Caution,
        meaning: "Theoretical or proven risks usually outweigh the advantages",
    },
    LegendEntry {
        category: 4,
        label: ScoreLabel::NotRecommended,
        meaning: "Unacceptable health risk (method not to be used)",
    },
];
