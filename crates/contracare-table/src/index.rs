use std::collections::HashSet;

use crate::load::ReferenceTable;
use crate::select::is_unselected;

/// Rows under this condition stay in the table but are never offered as a choice.
const HIDDEN_CONDITION: &str = "age";

impl ReferenceTable {
    /// Distinct user-facing conditions, in first-appearance order.
    pub fn conditions(&self) -> Vec<&str> {
        distinct(
            self.rows()
                .iter()
                .map(|r| r.condition.as_str())
                .filter(|c| c.to_lowercase() != HIDDEN_CONDITION),
        )
    }

    /// Distinct sub-conditions of `condition`, in first-appearance order.
    ///
    /// Empty for the unselected sentinel and for conditions with no rows.
    pub fn sub_conditions(&self, condition: &str) -> Vec<&str> {
        if is_unselected(condition) {
            return Vec::new();
        }
        distinct(
            self.rows()
                .iter()
                .filter(|r| r.condition == condition)
                .map(|r| r.sub_condition.as_str()),
        )
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
