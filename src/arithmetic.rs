use crate::{vector::Vector, Result, VectorError};
use std::ops::{Mul, Neg};

impl Vector {
    pub fn plus(&self, v: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(v)?;
        Ok(Vector::from_nonempty(self.coordinates() + v.coordinates()))
    }

    pub fn minus(&self, v: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(v)?;
        Ok(Vector::from_nonempty(self.coordinates() - v.coordinates()))
    }

    pub fn scalar_mult(&self, c: f64) -> Vector {
        self.map(|x| c * x)
    }

    /// Euclidean norm.
    ///
    /// Finite for every vector of finite coordinates: when the plain sum of
    /// squares overflows or underflows, the coordinates are rescaled by the
    /// largest absolute value before squaring.
    pub fn magnitude(&self) -> f64 {
        let direct = self.coordinates().dot(self.coordinates()).sqrt();
        if direct.is_finite() && (direct > 0.0 || self.iter().all(|&x| x == 0.0)) {
            return direct;
        }
        let scale = self.max_abs();
        let rescaled = self.rescaled();
        scale * rescaled.dot(&rescaled).sqrt()
    }

    /// The unit vector pointing the same way as `self`.
    pub fn normalize(&self) -> Result<Vector> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(VectorError::ZeroVectorNormalization);
        }
        // Dividing keeps tiny magnitudes from turning into an infinite factor.
        Ok(self.map(|x| x / magnitude))
    }

    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Vector {
        Vector::from_nonempty(self.coordinates().mapv(f))
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scalar_mult(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scalar_mult(rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.map(|x| -x)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}
