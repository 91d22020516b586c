use crate::{vector::Vector, Result, VectorError};
use std::f64::consts::PI;

/// Tolerance used by the zero and orthogonality checks when none is given.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl Vector {
    /// Angle between `self` and `v`, in `[0, PI]` radians or `[0, 180]` degrees.
    pub fn angle_between(&self, v: &Vector, unit: AngleUnit) -> Result<f64> {
        let inner = self.dot_product(v)?;
        let (self_magnitude, v_magnitude) = (self.magnitude(), v.magnitude());
        if self_magnitude == 0.0 || v_magnitude == 0.0 {
            return Err(VectorError::ZeroVectorNormalization);
        }

        let magnitudes = self_magnitude * v_magnitude;
        let cosine = if inner.is_finite() && magnitudes.is_finite() && magnitudes > 0.0 {
            inner / magnitudes
        } else {
            // The dot product or the magnitude product left f64 range.
            let (a, b) = (self.rescaled(), v.rescaled());
            a.dot(&b) / (a.dot(&a).sqrt() * b.dot(&b).sqrt())
        };

        // Rounding can push the cosine of (anti)parallel vectors just past +-1.
        let radians = cosine.clamp(-1.0, 1.0).acos();

        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    pub fn is_zero_vector(&self) -> bool {
        self.is_zero_vector_within(DEFAULT_TOLERANCE)
    }

    pub fn is_zero_vector_within(&self, tolerance: f64) -> bool {
        self.magnitude() < tolerance
    }

    pub fn is_orthogonal(&self, v: &Vector) -> Result<bool> {
        self.is_orthogonal_within(v, DEFAULT_TOLERANCE)
    }

    pub fn is_orthogonal_within(&self, v: &Vector, tolerance: f64) -> Result<bool> {
        Ok(self.dot_product(v)?.abs() < tolerance)
    }

    /// True when either vector is zero or the angle between them is exactly
    /// `0` or `PI`. The angle comparison is exact, so nearly parallel vectors
    /// whose angle picks up rounding error are reported as not parallel.
    pub fn is_parallel(&self, v: &Vector) -> Result<bool> {
        self.ensure_same_dimension(v)?;
        if self.is_zero_vector() || v.is_zero_vector() {
            return Ok(true);
        }
        let angle = self.angle_between(v, AngleUnit::Radians)?;
        Ok(angle == 0.0 || angle == PI)
    }
}
