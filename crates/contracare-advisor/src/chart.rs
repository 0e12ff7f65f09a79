use serde::{Deserialize, Serialize};
use ts_rs::TS;

use contracare_core::{Method, ReferenceRow};

/// Highest MEC category; a score at this value fills the whole bar.
const MAX_CATEGORY: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartPoint {
    pub method: Method,
    /// NaN for a missing score, serialized as `null`.
    #[serde(with = "contracare_core::scores::missing_as_null")]
    #[ts(type = "number | null")]
    pub score: f64,
}

/// Raw scores in declared method order, for a bar chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bar lengths in characters, scaled so category 4 spans `width`.
    ///
    /// Non-finite and non-positive scores get an empty bar; scores above 4
    /// are clamped to the full width.
    pub fn bar_lengths(&self, width: usize) -> Vec<(Method, usize)> {
        self.points
            .iter()
            .map(|p| (p.method, bar_length(p.score, width)))
            .collect()
    }

    /// Text rows of the form `"Cu-IUD  | ██████ 1.0"`.
    pub fn bars(&self, width: usize) -> Vec<String> {
        let label_width = self
            .points
            .iter()
            .map(|p| p.method.code().len())
            .max()
            .unwrap_or(0);

        self.points
            .iter()
            .zip(self.bar_lengths(width))
            .map(|(point, (method, len))| {
                format!(
                    "{:<label_width$} | {} {:?}",
                    method.code(),
                    "█".repeat(len),
                    point.score
                )
            })
            .collect()
    }
}

/// Series of a selected row; empty when nothing is selected.
pub fn chart_series(row: Option<&ReferenceRow>) -> ChartSeries {
    let points = row
        .map(|r| {
            r.scores
                .iter()
                .map(|(method, score)| ChartPoint { method, score })
                .collect()
        })
        .unwrap_or_default();
    ChartSeries { points }
}

fn bar_length(score: f64, width: usize) -> usize {
    if !score.is_finite() || score <= 0.0 {
        return 0;
    }
    let ratio = (score / MAX_CATEGORY).min(1.0);
    (ratio * width as f64).round() as usize
}
