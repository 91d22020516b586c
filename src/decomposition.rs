use crate::{vector::Vector, Result, VectorError};

impl Vector {
    /// The component of `self` parallel to `basis`.
    pub fn component_projection_vector(&self, basis: &Vector) -> Result<Vector> {
        let unit = basis.normalize().map_err(|e| match e {
            VectorError::ZeroVectorNormalization => {
                log::debug!("projection onto zero basis {}", basis);
                VectorError::NoUniqueParallelComponent
            }
            other => other,
        })?;
        let weight = self.dot_product(&unit)?;
        Ok(unit.scalar_mult(weight))
    }

    /// The component of `self` orthogonal to `basis`, i.e. what remains after
    /// removing the projection onto `basis`.
    pub fn component_orthogonal_vector(&self, basis: &Vector) -> Result<Vector> {
        let projection = self.component_projection_vector(basis).map_err(|e| match e {
            VectorError::NoUniqueParallelComponent => {
                log::debug!("orthogonal decomposition against zero basis {}", basis);
                VectorError::NoUniqueOrthogonalComponent
            }
            other => other,
        })?;
        self.minus(&projection)
    }
}
