// Block-Jacobi preconditioner implementation

use faer::linalg::cholesky::llt::factor::LltError;
use faer::linalg::triangular_solve::{solve_lower_triangular_in_place, solve_upper_triangular_in_place};
use faer::{Mat, MatMut, MatRef, Par, Side};
use tracing::{debug, error, info};

use crate::config::Verbosity;
use crate::core::{Damping, FactorGraph, KeyInfo};
use crate::error::KError;
use crate::preconditioner::{BlockBuffer, Preconditioner};

/// Block-Jacobi preconditioner.
///
/// Keeps, for every variable, the upper Cholesky factor `Rₖ` of its damped
/// diagonal Hessian block `Hₖ + diag(λₖ) = RₖᵀRₖ`. Cross-variable coupling is
/// dropped, so `S = blockdiag(Rₖ⁻¹)` and `S Sᵀ = blockdiag(Hₖ⁻¹)`:
///
/// - `solve`: `xₖ = Rₖ⁻¹ yₖ`
/// - `transpose_solve`: `xₖ = Rₖ⁻ᵀ yₖ`
#[derive(Debug, Clone, Default)]
pub struct BlockJacobiPreconditioner {
    buffer: Option<BlockBuffer>,
    verbosity: Verbosity,
}

impl BlockJacobiPreconditioner {
    /// new with empty state; user must call `build`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbosity(verbosity: Verbosity) -> Self {
        Self { buffer: None, verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn is_built(&self) -> bool {
        self.buffer.is_some()
    }

    /// Factors of the last successful build.
    pub fn buffer(&self) -> Option<&BlockBuffer> {
        self.buffer.as_ref()
    }

    /// Release the factors, back to the unbuilt state.
    pub fn clean(&mut self) {
        self.buffer = None;
    }

    /// Accumulate and factor every diagonal block into a fresh buffer.
    fn factorize(graph: &dyn FactorGraph, key_info: &KeyInfo, lambda: &Damping) -> Result<BlockBuffer, KError> {
        let mut buffer = BlockBuffer::new(key_info.ordering().to_vec(), key_info.col_spec());
        for (i, (key, entry)) in key_info.iter().enumerate() {
            let d = entry.dim;
            let mut h = Mat::<f64>::zeros(d, d);
            for factor in graph.factors_touching(key) {
                let Some(block) = factor.diagonal_block(key) else { continue };
                if block.nrows() != d || block.ncols() != d {
                    return Err(KError::BlockShape { key, expected: d, rows: block.nrows(), cols: block.ncols() });
                }
                h += &block;
            }
            if let Some(damping) = lambda.get(&key) {
                if damping.len() != d {
                    return Err(KError::DampingLength { key, expected: d, actual: damping.len() });
                }
                for (j, l) in damping.iter().enumerate() {
                    h[(j, j)] += l;
                }
            }
            let llt = h.llt(Side::Lower).map_err(|e| match e {
                LltError::NonPositivePivot { index } => KError::NotPositiveDefinite { key, pivot: index },
            })?;
            // column-major L is row-major R = Lᵀ
            MatMut::from_column_major_slice_mut(buffer.block_mut(i), d, d).copy_from(llt.L());
        }
        Ok(buffer)
    }

    /// Copy `y` into `x` and run `f` on every block segment of `x`.
    fn apply_blocks<F>(&self, y: &[f64], x: &mut [f64], f: F) -> Result<(), KError>
    where
        F: Fn(&[f64], usize, &mut [f64]) + Send + Sync,
    {
        let buffer = self.buffer.as_ref().ok_or(KError::NotBuilt)?;
        let n = buffer.total_dim();
        if y.len() != n {
            return Err(KError::DimensionMismatch { expected: n, actual: y.len() });
        }
        if x.len() != n {
            return Err(KError::DimensionMismatch { expected: n, actual: x.len() });
        }
        x.copy_from_slice(y);
        let segments = buffer.segments_mut(x);
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            segments
                .into_par_iter()
                .enumerate()
                .for_each(|(i, xi)| f(buffer.block(i), buffer.dims()[i], xi));
        }
        #[cfg(not(feature = "rayon"))]
        {
            for (i, xi) in segments.into_iter().enumerate() {
                f(buffer.block(i), buffer.dims()[i], xi);
            }
        }
        Ok(())
    }
}

impl Preconditioner for BlockJacobiPreconditioner {
    fn solve(&self, y: &[f64], x: &mut [f64]) -> Result<(), KError> {
        self.apply_blocks(y, x, |r, d, xi| {
            let r = MatRef::from_row_major_slice(r, d, d);
            solve_upper_triangular_in_place(r, MatMut::from_column_major_slice_mut(xi, d, 1), Par::Seq);
        })
    }

    fn transpose_solve(&self, y: &[f64], x: &mut [f64]) -> Result<(), KError> {
        self.apply_blocks(y, x, |r, d, xi| {
            let r = MatRef::from_row_major_slice(r, d, d);
            solve_lower_triangular_in_place(r.transpose(), MatMut::from_column_major_slice_mut(xi, d, 1), Par::Seq);
        })
    }

    fn build(&mut self, graph: &dyn FactorGraph, key_info: &KeyInfo, lambda: &Damping) -> Result<(), KError> {
        debug!(blocks = key_info.len(), dim = key_info.total_dim(), "building block-jacobi preconditioner");
        let buffer = Self::factorize(graph, key_info, lambda).inspect_err(|e| {
            if self.verbosity >= Verbosity::Error {
                error!(error = %e, "block-jacobi build failed, keeping previous factors");
            }
        })?;
        if self.verbosity >= Verbosity::Complexity {
            info!(blocks = buffer.len(), nnz = buffer.nnz(), "block-jacobi preconditioner built");
        }
        self.buffer = Some(buffer);
        Ok(())
    }

    fn nnz(&self) -> usize {
        self.buffer.as_ref().map_or(0, BlockBuffer::nnz)
    }
}
