//! Collaborator traits consumed by the preconditioners.
//!
//! The factor graph itself is owned by the optimizer. A preconditioner only
//! needs to ask which factors touch a variable and what each of them adds to
//! that variable's diagonal Hessian block.

use faer::Mat;

use crate::core::Key;

/// A linear(ized) factor over a few variables.
pub trait GaussianFactor {
    /// Variables this factor involves.
    fn keys(&self) -> &[Key];
    /// Dimension of `key` as seen by this factor, `None` if not involved.
    fn dim(&self, key: Key) -> Option<usize>;
    /// Contribution of this factor to the `(key, key)` block of the
    /// Gauss-Newton Hessian, i.e. `Aₖᵀ W Aₖ`. `None` if not involved.
    fn diagonal_block(&self, key: Key) -> Option<Mat<f64>>;
}

/// Read access to a Gaussian factor graph.
pub trait FactorGraph {
    /// All factors involving `key`.
    fn factors_touching(&self, key: Key) -> Vec<&dyn GaussianFactor>;
    /// Every key referenced by some factor, in ascending order.
    fn keys(&self) -> Vec<Key>;
}
