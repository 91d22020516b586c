use crate::{Result, VectorError};
use ndarray::Array1;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// An immutable, fixed-dimension tuple of real numbers.
///
/// Every algebraic operation returns a fresh `Vector`; the coordinates of an
/// existing instance never change. Equality is exact, element by element.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    coordinates: Array1<f64>,
}

impl Vector {
    pub fn new(coordinates: Vec<f64>) -> Result<Self> {
        Self::from_array(Array1::from_vec(coordinates))
    }

    pub fn from_array(coordinates: Array1<f64>) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }
        Ok(Self { coordinates })
    }

    // Callers guarantee a non-empty array, e.g. by mapping an existing vector.
    pub(crate) fn from_nonempty(coordinates: Array1<f64>) -> Self {
        debug_assert!(!coordinates.is_empty());
        Self { coordinates }
    }

    /// The origin of the given dimension.
    pub fn zeros(dimension: usize) -> Result<Self> {
        Self::from_array(Array1::zeros(dimension))
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> &Array1<f64> {
        &self.coordinates
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.coordinates.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.coordinates.to_vec()
    }

    /// Largest absolute coordinate.
    pub(crate) fn max_abs(&self) -> f64 {
        self.coordinates.iter().fold(0.0, |acc: f64, &x| acc.max(x.abs()))
    }

    /// Coordinates divided by `max_abs`, so every entry lies in `[-1, 1]`.
    pub(crate) fn rescaled(&self) -> Array1<f64> {
        let scale = self.max_abs();
        if scale == 0.0 || !scale.is_finite() {
            return self.coordinates.clone();
        }
        self.coordinates.mapv(|x| x / scale)
    }

    /// Fails unless `other` has exactly the same dimension as `self`.
    pub(crate) fn ensure_same_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<f64>) -> Result<Self> {
        Self::new(coordinates)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: &[f64]) -> Result<Self> {
        Self::new(coordinates.to_vec())
    }
}

impl TryFrom<Array1<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Array1<f64>) -> Result<Self> {
        Self::from_array(coordinates)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coordinates[index]
    }
}

/// Accepts `1, 2, 3`, `(1, 2, 3)` and the `Display` form `Vector: (1, 2, 3)`.
impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        let body = s.trim();
        let body = body.strip_prefix("Vector:").unwrap_or(body).trim();
        let body = body
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(body);

        let mut tokens: Vec<&str> = body.split(',').map(str::trim).collect();
        // A single trailing comma is tolerated, as in "(1,)".
        if tokens.len() > 1 && tokens.last().map_or(false, |t| t.is_empty()) {
            tokens.pop();
        }
        if tokens.len() == 1 && tokens[0].is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }

        let coordinates = tokens
            .into_iter()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| VectorError::NotIterable(format!("{:?} is not a number", token)))
            })
            .collect::<Result<Vec<f64>>>()?;

        Self::new(coordinates)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        if self.dimension() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
