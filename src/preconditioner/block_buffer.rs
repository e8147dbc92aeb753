//! Packed storage for the per-variable Cholesky factors.
//!
//! All factors live in one contiguous `Vec<f64>`, block `i` (dimension `dᵢ`)
//! at `offsets[i]..offsets[i] + dᵢ²`, row-major upper triangular. Blocks are
//! in key-info order, so the `i`-th block also acts on the `i`-th contiguous
//! segment of the flattened vector.

use faer::Mat;

use crate::core::Key;

#[derive(Debug, Clone, PartialEq)]
pub struct BlockBuffer {
    data: Vec<f64>,
    keys: Vec<Key>,
    dims: Vec<usize>,
    offsets: Vec<usize>,
    total_dim: usize,
}

impl BlockBuffer {
    /// Zero-filled buffer sized Σ dᵢ².
    pub(crate) fn new(keys: Vec<Key>, dims: Vec<usize>) -> Self {
        debug_assert_eq!(keys.len(), dims.len());
        let mut offsets = Vec::with_capacity(dims.len());
        let mut nnz = 0;
        for d in &dims {
            offsets.push(nnz);
            nnz += d * d;
        }
        Self { data: vec![0.0; nnz], keys, total_dim: dims.iter().sum(), dims, offsets }
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Stored scalars, Σ dᵢ².
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Length of the vectors the blocks act on.
    pub fn total_dim(&self) -> usize {
        self.total_dim
    }

    /// Raw packed storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Packed factor of block `i`.
    pub fn factor(&self, i: usize) -> Option<&[f64]> {
        let (o, d) = (*self.offsets.get(i)?, self.dims[i]);
        self.data.get(o..o + d * d)
    }

    /// Packed factor of `key`, if the key has a block.
    pub fn factor_of(&self, key: Key) -> Option<&[f64]> {
        self.keys.iter().position(|k| *k == key).and_then(|i| self.factor(i))
    }

    /// Factor of block `i` as a dense matrix.
    pub fn factor_mat(&self, i: usize) -> Option<Mat<f64>> {
        let r = self.factor(i)?;
        let d = self.dims[i];
        Some(Mat::from_fn(d, d, |row, col| r[row * d + col]))
    }

    pub(crate) fn block(&self, i: usize) -> &[f64] {
        let (o, d) = (self.offsets[i], self.dims[i]);
        &self.data[o..o + d * d]
    }

    pub(crate) fn block_mut(&mut self, i: usize) -> &mut [f64] {
        let (o, d) = (self.offsets[i], self.dims[i]);
        &mut self.data[o..o + d * d]
    }

    /// Split a vector of length `total_dim` into one segment per block.
    pub(crate) fn segments_mut<'a>(&self, x: &'a mut [f64]) -> Vec<&'a mut [f64]> {
        let mut out = Vec::with_capacity(self.dims.len());
        let mut rest = x;
        for &d in &self.dims {
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(d);
            out.push(head);
            rest = tail;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let mut buf = BlockBuffer::new(vec![4, 9], vec![2, 3]);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.nnz(), 13);
        assert_eq!(buf.total_dim(), 5);
        buf.block_mut(1)[0] = 7.0;
        assert_eq!(buf.as_slice()[4], 7.0);
        assert_eq!(buf.factor_of(9).unwrap().len(), 9);
        assert_eq!(buf.factor_mat(1).unwrap()[(0, 0)], 7.0);
        assert!(buf.factor(2).is_none());
        assert!(buf.factor_of(5).is_none());
    }

    #[test]
    fn segments() {
        let buf = BlockBuffer::new(vec![0, 1, 2], vec![1, 0, 2]);
        let mut x = vec![1.0, 2.0, 3.0];
        let segs = buf.segments_mut(&mut x);
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0], &[1.0][..]);
        assert!(segs[1].is_empty());
        assert_eq!(segs[2], &[2.0, 3.0][..]);
    }
}
