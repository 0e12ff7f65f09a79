//! contracare-advisor
//!
//! Turns a selected reference row into display-ready recommendations, a
//! chart series and a plain-text report. Everything here is a pure function
//! of the loaded table and the user's current selection.

pub mod chart;
pub mod display;
pub mod error;
pub mod recommend;
pub mod reference;
pub mod report;
pub mod selection;
