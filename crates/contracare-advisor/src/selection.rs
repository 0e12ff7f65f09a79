use serde::{Deserialize, Serialize};
use ts_rs::TS;

use contracare_table::is_unselected;

/// Where the user is in the two-step condition / sub-condition choice.
///
/// Picking a condition always discards a previously chosen sub-condition,
/// since the sub-condition list is recomputed for every condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum SelectionState {
    #[default]
    NoConditionSelected,
    ConditionSelected {
        condition: String,
    },
    FullySelected {
        condition: String,
        sub_condition: String,
    },
}

impl SelectionState {
    pub fn choose_condition(self, condition: &str) -> Self {
        if is_unselected(condition) {
            SelectionState::NoConditionSelected
        } else {
            SelectionState::ConditionSelected {
                condition: condition.to_string(),
            }
        }
    }

    /// No-op until a condition has been chosen.
    pub fn choose_sub_condition(self, sub_condition: &str) -> Self {
        let Some(condition) = self.condition().map(str::to_string) else {
            return self;
        };

        if is_unselected(sub_condition) {
            SelectionState::ConditionSelected { condition }
        } else {
            SelectionState::FullySelected {
                condition,
                sub_condition: sub_condition.to_string(),
            }
        }
    }

    pub fn condition(&self) -> Option<&str> {
        match self {
            SelectionState::NoConditionSelected => None,
            SelectionState::ConditionSelected { condition }
            | SelectionState::FullySelected { condition, .. } => Some(condition),
        }
    }

    pub fn sub_condition(&self) -> Option<&str> {
        match self {
            SelectionState::FullySelected { sub_condition, .. } => Some(sub_condition),
            _ => None,
        }
    }
}
