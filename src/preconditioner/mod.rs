//! Preconditioners for the PCG inner solver.
//!
//! PCG solves `A x = b` by reparametrizing it as `Sᵀ A S y = Sᵀ b` with
//! `S Sᵀ ≈ A⁻¹`. This module defines the Preconditioner trait over that
//! factor `S` and includes the identity baseline and block-Jacobi.

use crate::core::{Damping, FactorGraph, KeyInfo};
use crate::error::KError;

/// A preconditioner given by a factor `S` with `S Sᵀ ≈ A⁻¹`.
///
/// `solve`/`transpose_solve` never mutate the operator, so they may be
/// called concurrently; `build` needs exclusive access.
pub trait Preconditioner: Send + Sync {
    /// Apply `x = S⁻¹ y`.
    fn solve(&self, y: &[f64], x: &mut [f64]) -> Result<(), KError>;

    /// Apply `x = S⁻ᵀ y`.
    fn transpose_solve(&self, y: &[f64], x: &mut [f64]) -> Result<(), KError>;

    /// (Re)build from the current linearization. Replaces all previous
    /// state on success and keeps it untouched on failure.
    fn build(&mut self, graph: &dyn FactorGraph, key_info: &KeyInfo, lambda: &Damping) -> Result<(), KError>;

    /// Stored scalars, for complexity reporting.
    fn nnz(&self) -> usize {
        0
    }

    /// Apply the full preconditioner `x = S⁻¹ S⁻ᵀ y ≈ A⁻¹ y`.
    fn full_solve(&self, y: &[f64], x: &mut [f64]) -> Result<(), KError> {
        let mut tmp = vec![0.0; y.len()];
        self.transpose_solve(y, &mut tmp)?;
        self.solve(&tmp, x)
    }
}

// Submodules for the supported kernels
pub mod block_buffer;
pub mod block_jacobi;
pub mod identity;

// Re-exports for convenience
pub use block_buffer::BlockBuffer;
pub use block_jacobi::BlockJacobiPreconditioner;
pub use identity::IdentityPreconditioner;
