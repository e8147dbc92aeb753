// Identity (no-op) preconditioner

use crate::core::{Damping, FactorGraph, KeyInfo};
use crate::error::KError;
use crate::preconditioner::Preconditioner;

/// Identity preconditioner: S = I.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityPreconditioner;

impl IdentityPreconditioner {
    pub fn new() -> Self {
        Self
    }
}

fn copy_checked(y: &[f64], x: &mut [f64]) -> Result<(), KError> {
    if x.len() != y.len() {
        return Err(KError::DimensionMismatch { expected: y.len(), actual: x.len() });
    }
    x.copy_from_slice(y);
    Ok(())
}

impl Preconditioner for IdentityPreconditioner {
    fn solve(&self, y: &[f64], x: &mut [f64]) -> Result<(), KError> {
        copy_checked(y, x)
    }

    fn transpose_solve(&self, y: &[f64], x: &mut [f64]) -> Result<(), KError> {
        copy_checked(y, x)
    }

    fn build(&mut self, _graph: &dyn FactorGraph, _key_info: &KeyInfo, _lambda: &Damping) -> Result<(), KError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GaussianFactorGraph;

    #[test]
    fn passes_through() {
        let mut pc = IdentityPreconditioner::new();
        pc.build(&GaussianFactorGraph::new(), &KeyInfo::default(), &Damping::new()).unwrap();
        let y = vec![1.0, -2.5, 3.0];
        let mut x = vec![0.0; 3];
        pc.solve(&y, &mut x).unwrap();
        assert_eq!(x, y);
        x.fill(0.0);
        pc.transpose_solve(&y, &mut x).unwrap();
        assert_eq!(x, y);
        x.fill(0.0);
        pc.full_solve(&y, &mut x).unwrap();
        assert_eq!(x, y);
        assert_eq!(pc.nnz(), 0);
    }

    #[test]
    fn length_mismatch() {
        let pc = IdentityPreconditioner::new();
        let mut x = vec![0.0; 2];
        assert_eq!(
            pc.solve(&[1.0, 2.0, 3.0], &mut x),
            Err(KError::DimensionMismatch { expected: 3, actual: 2 })
        );
    }
}
