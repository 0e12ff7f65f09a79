use serde::{Deserialize, Serialize};
use ts_rs::TS;

use contracare_table::ReferenceTable;

use crate::chart::{ChartSeries, chart_series};
use crate::recommend::{Recommendation, render};
use crate::selection::SelectionState;

/// Everything a UI needs to draw one screen of the advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisplayModel {
    pub selection: SelectionState,
    pub condition_options: Vec<String>,
    /// Recomputed for the current condition; empty until one is chosen.
    pub sub_condition_options: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub chart: ChartSeries,
}

impl DisplayModel {
    pub fn build(table: &ReferenceTable, selection: &SelectionState) -> Self {
        let condition_options = to_owned(table.conditions());
        let sub_condition_options = selection
            .condition()
            .map(|c| to_owned(table.sub_conditions(c)))
            .unwrap_or_default();

        let row = match selection {
            SelectionState::FullySelected {
                condition,
                sub_condition,
            } => table.select_row(condition, sub_condition),
            _ => None,
        };

        tracing::debug!(
            ?selection,
            matched = row.is_some(),
            "display model built"
        );

        Self {
            selection: selection.clone(),
            condition_options,
            sub_condition_options,
            recommendations: render(row),
            chart: chart_series(row),
        }
    }

    pub fn has_recommendations(&self) -> bool {
        !self.recommendations.is_empty()
    }
}

fn to_owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}
