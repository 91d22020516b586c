use crate::{vector::Vector, Result, VectorError};
use ndarray::{array, Array1};

impl Vector {
    pub fn dot_product(&self, v: &Vector) -> Result<f64> {
        self.ensure_same_dimension(v)?;
        Ok(self.coordinates().dot(v.coordinates()))
    }

    /// Cross product of two vectors of dimension 3, or of dimension 2 after
    /// both are embedded into 3-space with a zero third coordinate.
    pub fn cross_product(&self, v: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(v)?;
        match self.dimension() {
            3 => Ok(Vector::from_nonempty(cross3(self.coordinates(), v.coordinates()))),
            2 => {
                log::trace!("embedding 2-D operands into 3-D for the cross product");
                let a = embed_in_3d(self.coordinates());
                let b = embed_in_3d(v.coordinates());
                Ok(Vector::from_nonempty(cross3(&a, &b)))
            }
            dimension => Err(VectorError::CrossProductDimension(dimension)),
        }
    }

    pub fn area_parallelogram(&self, v: &Vector) -> Result<f64> {
        Ok(self.cross_product(v)?.magnitude())
    }

    pub fn area_triangle(&self, v: &Vector) -> Result<f64> {
        Ok(self.area_parallelogram(v)? / 2.0)
    }
}

fn embed_in_3d(planar: &Array1<f64>) -> Array1<f64> {
    array![planar[0], planar[1], 0.0]
}

fn cross3(v1: &Array1<f64>, v2: &Array1<f64>) -> Array1<f64> {
    let x = v1[1] * v2[2] - v2[1] * v1[2];
    let y = -(v1[0] * v2[2] - v2[0] * v1[2]);
    let z = v1[0] * v2[1] - v2[0] * v1[1];
    array![x, y, z]
}
