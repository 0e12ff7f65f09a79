use serde::Serialize;

use crate::scores::MethodScores;

/// A single condition/sub-condition row of the MEC reference table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceRow {
    pub condition: String,
    pub sub_condition: String,
    pub scores: MethodScores,
}

impl ReferenceRow {
    pub fn new(
        condition: impl Into<String>,
        sub_condition: impl Into<String>,
        scores: MethodScores,
    ) -> Self {
        Self {
            condition: condition.into(),
            sub_condition: sub_condition.into(),
            scores,
        }
    }

    /// Exact, case-sensitive match on both keys.
    pub fn matches(&self, condition: &str, sub_condition: &str) -> bool {
        self.condition == condition && self.sub_condition == sub_condition
    }
}
