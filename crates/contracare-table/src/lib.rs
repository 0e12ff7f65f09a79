//! contracare-table
//!
//! The MEC reference table: CSV loading, the condition index shown to the
//! user, and row selection by condition and sub-condition.

pub mod error;
pub mod index;
pub mod load;
pub mod select;

pub use load::ReferenceTable;
pub use select::{NONE_SELECTED, is_unselected};
