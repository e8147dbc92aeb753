// Gaussian factor graph container

use std::collections::BTreeMap;

use crate::core::{FactorGraph, GaussianFactor, Key};
use crate::graph::factor::LinearFactor;

/// Owning collection of linear factors, indexed by the keys they touch.
#[derive(Debug, Clone, Default)]
pub struct GaussianFactorGraph {
    factors: Vec<LinearFactor>,
    by_key: BTreeMap<Key, Vec<usize>>,
}

impl GaussianFactorGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, factor: impl Into<LinearFactor>) {
        let factor = factor.into();
        let idx = self.factors.len();
        for key in factor.keys() {
            self.by_key.entry(*key).or_default().push(idx);
        }
        self.factors.push(factor);
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinearFactor> {
        self.factors.iter()
    }
}

impl FactorGraph for GaussianFactorGraph {
    fn factors_touching(&self, key: Key) -> Vec<&dyn GaussianFactor> {
        self.by_key
            .get(&key)
            .map(|idx| idx.iter().map(|&i| &self.factors[i] as &dyn GaussianFactor).collect())
            .unwrap_or_default()
    }

    fn keys(&self) -> Vec<Key> {
        self.by_key.keys().copied().collect()
    }
}

impl<F: Into<LinearFactor>> FromIterator<F> for GaussianFactorGraph {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut graph = GaussianFactorGraph::new();
        for f in iter {
            graph.push(f);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KeyInfo;
    use crate::graph::JacobianFactor;
    use faer::Mat;

    #[test]
    fn index_by_key() {
        let mut g = GaussianFactorGraph::new();
        g.push(JacobianFactor::new(vec![(3, Mat::zeros(1, 2))], vec![0.0]).unwrap());
        g.push(
            JacobianFactor::new(vec![(3, Mat::zeros(1, 2)), (1, Mat::zeros(1, 1))], vec![0.0])
                .unwrap(),
        );
        assert_eq!(g.len(), 2);
        assert_eq!(g.keys(), vec![1, 3]);
        assert_eq!(g.factors_touching(3).len(), 2);
        assert_eq!(g.factors_touching(1).len(), 1);
        assert!(g.factors_touching(9).is_empty());

        let info = KeyInfo::from_graph(&g).unwrap();
        assert_eq!(info.ordering(), &[1, 3]);
        assert_eq!(info.offset(3), Some(1));
        assert_eq!(info.total_dim(), 3);
    }
}
