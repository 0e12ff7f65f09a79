use contracare_core::ReferenceRow;

use crate::load::ReferenceTable;

/// Placeholder choice meaning the user has not picked anything yet.
pub const NONE_SELECTED: &str = "None";

/// True for the "none selected" sentinel and for an empty choice.
pub fn is_unselected(value: &str) -> bool {
    value.is_empty() || value == NONE_SELECTED
}

impl ReferenceTable {
    /// First row in table order matching both keys exactly.
    ///
    /// Returns `None` without searching when either key is unselected, and
    /// `None` when nothing matches; neither case is an error.
    pub fn select_row(&self, condition: &str, sub_condition: &str) -> Option<&ReferenceRow> {
        if is_unselected(condition) || is_unselected(sub_condition) {
            return None;
        }

        let row = self
            .rows()
            .iter()
            .find(|r| r.matches(condition, sub_condition));
        if row.is_none() {
            tracing::debug!(condition, sub_condition, "no reference row matched");
        }
        row
    }
}
