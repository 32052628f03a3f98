// File: crates/chart-core/src/axis.rs
// Summary: Axis identity and per-axis scale kind (linear or log10) with value validation.

use std::fmt;

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisId {
    X,
    Y,
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisId::X => f.write_str("x"),
            AxisId::Y => f.write_str("y"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

impl ScaleKind {
    pub fn is_log(self) -> bool {
        matches!(self, ScaleKind::Log10)
    }

    /// Raw value to display space.
    #[inline]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            ScaleKind::Linear => v,
            ScaleKind::Log10 => v.log10(),
        }
    }

    /// Reject values whose display-space image would be non-finite.
    pub fn validate(self, axis: AxisId, value: f64) -> Result<(), ChartError> {
        if !value.is_finite() {
            return Err(ChartError::NonFinite { axis, value });
        }
        if self.is_log() && value <= 0.0 {
            return Err(ChartError::NonPositiveOnLogAxis { axis, value });
        }
        Ok(())
    }
}
