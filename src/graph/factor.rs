//! Jacobian and Hessian linear factors.

use faer::{Col, Mat};

use crate::core::{GaussianFactor, Key};
use crate::error::KError;

/// Whitened-or-not linear factor `‖Σ Aₖ xₖ - b‖²_W` with diagonal weights
/// `W = diag(1/σ²)`; unit weights when no sigmas are given.
#[derive(Debug, Clone)]
pub struct JacobianFactor {
    keys: Vec<Key>,
    blocks: Vec<Mat<f64>>,
    rhs: Vec<f64>,
    sigmas: Option<Vec<f64>>,
}

impl JacobianFactor {
    /// Build from `(key, Aₖ)` terms; every `Aₖ` must have `rhs.len()` rows.
    pub fn new(terms: Vec<(Key, Mat<f64>)>, rhs: Vec<f64>) -> Result<Self, KError> {
        let mut keys = Vec::with_capacity(terms.len());
        let mut blocks = Vec::with_capacity(terms.len());
        for (key, a) in terms {
            if a.nrows() != rhs.len() {
                return Err(KError::DimensionMismatch { expected: rhs.len(), actual: a.nrows() });
            }
            if keys.contains(&key) {
                return Err(KError::DuplicateKey(key));
            }
            keys.push(key);
            blocks.push(a);
        }
        Ok(Self { keys, blocks, rhs, sigmas: None })
    }

    /// Attach a diagonal noise model, one standard deviation per row.
    pub fn with_sigmas(mut self, sigmas: Vec<f64>) -> Result<Self, KError> {
        if sigmas.len() != self.rhs.len() {
            return Err(KError::DimensionMismatch { expected: self.rhs.len(), actual: sigmas.len() });
        }
        self.sigmas = Some(sigmas);
        Ok(self)
    }

    pub fn rows(&self) -> usize {
        self.rhs.len()
    }

    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }

    pub fn block(&self, key: Key) -> Option<&Mat<f64>> {
        self.keys.iter().position(|k| *k == key).map(|i| &self.blocks[i])
    }

    /// Row weights `1/σ²` as a column.
    fn weights(&self) -> Col<f64> {
        match &self.sigmas {
            Some(s) => Col::from_fn(s.len(), |r| 1.0 / (s[r] * s[r])),
            None => Col::from_fn(self.rows(), |_| 1.0),
        }
    }
}

impl GaussianFactor for JacobianFactor {
    fn keys(&self) -> &[Key] {
        &self.keys
    }

    fn dim(&self, key: Key) -> Option<usize> {
        self.block(key).map(|a| a.ncols())
    }

    fn diagonal_block(&self, key: Key) -> Option<Mat<f64>> {
        let a = self.block(key)?;
        let wa = self.weights().as_diagonal() * a.as_ref();
        Some(a.transpose() * wa.as_ref())
    }
}

/// Quadratic factor stored in information form `½ xᵀ G x - gᵀ x`, with `G`
/// dense over the concatenation of its variables.
#[derive(Debug, Clone)]
pub struct HessianFactor {
    keys: Vec<Key>,
    dims: Vec<usize>,
    offsets: Vec<usize>,
    info: Mat<f64>,
    linear: Vec<f64>,
}

impl HessianFactor {
    /// `info` must be square of size Σ dims; only its upper triangle is read.
    pub fn new(keys_dims: Vec<(Key, usize)>, info: Mat<f64>, linear: Vec<f64>) -> Result<Self, KError> {
        let mut keys = Vec::with_capacity(keys_dims.len());
        let mut dims = Vec::with_capacity(keys_dims.len());
        let mut offsets = Vec::with_capacity(keys_dims.len());
        let mut n = 0;
        for (key, d) in keys_dims {
            if keys.contains(&key) {
                return Err(KError::DuplicateKey(key));
            }
            keys.push(key);
            dims.push(d);
            offsets.push(n);
            n += d;
        }
        if info.nrows() != n || info.ncols() != n {
            return Err(KError::DimensionMismatch { expected: n, actual: info.nrows().max(info.ncols()) });
        }
        if linear.len() != n {
            return Err(KError::DimensionMismatch { expected: n, actual: linear.len() });
        }
        Ok(Self { keys, dims, offsets, info, linear })
    }

    /// Information form of a Jacobian factor: `G = Aᵀ W A`, `g = Aᵀ W b`.
    pub fn from_jacobian(jf: &JacobianFactor) -> Self {
        let keys = jf.keys.clone();
        let dims: Vec<usize> = jf.blocks.iter().map(|a| a.ncols()).collect();
        let mut offsets = Vec::with_capacity(dims.len());
        let mut n = 0;
        for d in &dims {
            offsets.push(n);
            n += d;
        }
        let w = jf.weights();
        let b = Col::from_fn(jf.rows(), |r| jf.rhs[r]);
        let weighted: Vec<Mat<f64>> = jf.blocks.iter().map(|a| w.as_diagonal() * a.as_ref()).collect();

        let mut info = Mat::zeros(n, n);
        let mut linear = vec![0.0; n];
        for (bi, ai) in jf.blocks.iter().enumerate() {
            for (bj, waj) in weighted.iter().enumerate() {
                let g = ai.transpose() * waj.as_ref();
                info.submatrix_mut(offsets[bi], offsets[bj], dims[bi], dims[bj]).copy_from(&g);
            }
            let g = weighted[bi].transpose() * b.as_ref();
            for (l, v) in linear[offsets[bi]..offsets[bi] + dims[bi]].iter_mut().zip(g.iter()) {
                *l = *v;
            }
        }
        Self { keys, dims, offsets, info, linear }
    }

    pub fn info(&self) -> &Mat<f64> {
        &self.info
    }

    pub fn linear_term(&self) -> &[f64] {
        &self.linear
    }
}

impl GaussianFactor for HessianFactor {
    fn keys(&self) -> &[Key] {
        &self.keys
    }

    fn dim(&self, key: Key) -> Option<usize> {
        self.keys.iter().position(|k| *k == key).map(|i| self.dims[i])
    }

    fn diagonal_block(&self, key: Key) -> Option<Mat<f64>> {
        let i = self.keys.iter().position(|k| *k == key)?;
        let (o, d) = (self.offsets[i], self.dims[i]);
        // symmetrize from the upper triangle
        Some(Mat::from_fn(d, d, |r, c| {
            let (r, c) = if r <= c { (r, c) } else { (c, r) };
            self.info[(o + r, o + c)]
        }))
    }
}

/// Closed set of factor kinds a [`GaussianFactorGraph`](super::GaussianFactorGraph) stores.
#[derive(Debug, Clone)]
pub enum LinearFactor {
    Jacobian(JacobianFactor),
    Hessian(HessianFactor),
}

impl GaussianFactor for LinearFactor {
    fn keys(&self) -> &[Key] {
        match self {
            LinearFactor::Jacobian(f) => f.keys(),
            LinearFactor::Hessian(f) => f.keys(),
        }
    }

    fn dim(&self, key: Key) -> Option<usize> {
        match self {
            LinearFactor::Jacobian(f) => f.dim(key),
            LinearFactor::Hessian(f) => f.dim(key),
        }
    }

    fn diagonal_block(&self, key: Key) -> Option<Mat<f64>> {
        match self {
            LinearFactor::Jacobian(f) => f.diagonal_block(key),
            LinearFactor::Hessian(f) => f.diagonal_block(key),
        }
    }
}

impl From<JacobianFactor> for LinearFactor {
    fn from(f: JacobianFactor) -> Self {
        LinearFactor::Jacobian(f)
    }
}

impl From<HessianFactor> for LinearFactor {
    fn from(f: HessianFactor) -> Self {
        LinearFactor::Hessian(f)
    }
}
