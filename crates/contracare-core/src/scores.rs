use serde::Serialize;

use crate::method::Method;

/// One score per contraceptive method, stored in [`Method::ALL`] order.
///
/// A value is NaN when the source cell was empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethodScores([f64; Method::COUNT]);

impl MethodScores {
    /// Build from values given in [`Method::ALL`] order.
    pub fn new(values: [f64; Method::COUNT]) -> Self {
        Self(values)
    }

    pub fn from_fn(mut score_for: impl FnMut(Method) -> f64) -> Self {
        Self(Method::ALL.map(&mut score_for))
    }

    pub fn get(&self, method: Method) -> f64 {
        self.0[method.index()]
    }

    /// Iterate `(method, score)` pairs in declared method order.
    pub fn iter(&self) -> impl Iterator<Item = (Method, f64)> + '_ {
        Method::ALL.into_iter().map(|m| (m, self.get(m)))
    }
}

/// Serde helpers that write a missing (NaN) score as `null` and read `null`
/// back as NaN.
///
/// Use with `#[serde(with = "contracare_core::scores::missing_as_null")]`.
pub mod missing_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if score.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(score)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
