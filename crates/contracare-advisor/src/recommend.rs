use serde::{Deserialize, Serialize};
use ts_rs::TS;

use contracare_core::{Method, ReferenceRow, ScoreLabel, interpret};

/// One method's interpreted score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub method: Method,
    pub label: ScoreLabel,
    /// The score exactly as stored in the table; NaN when the cell was empty,
    /// serialized as `null`.
    #[serde(with = "contracare_core::scores::missing_as_null")]
    #[ts(type = "number | null")]
    pub raw_score: f64,
}

/// Interpret every method of `row` in declared method order.
///
/// An absent row yields an empty list, the "nothing to show yet" state.
pub fn render(row: Option<&ReferenceRow>) -> Vec<Recommendation> {
    let Some(row) = row else {
        return Vec::new();
    };

    row.scores
        .iter()
        .map(|(method, raw_score)| Recommendation {
            method,
            label: interpret(raw_score),
            raw_score,
        })
        .collect()
}
