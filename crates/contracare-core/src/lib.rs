//! contracare-core
//!
//! Shared vocabulary of the advisor: contraceptive methods, per-method score
//! vectors, reference rows and the MEC score interpretation. Pure data, no I/O.

pub mod error;
pub mod method;
pub mod row;
pub mod scores;
pub mod scoring;

pub use method::Method;
pub use row::ReferenceRow;
pub use scores::MethodScores;
pub use scoring::{ScoreLabel, interpret};
