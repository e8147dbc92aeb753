//! Variable layout of the flattened solution vector.

use std::collections::BTreeMap;

use crate::core::Key;
use crate::core::traits::FactorGraph;
use crate::error::KError;

/// Position of one variable in the ordering and in the flattened vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInfoEntry {
    /// Rank of the variable in the ordering.
    pub index: usize,
    /// Number of scalar unknowns.
    pub dim: usize,
    /// First row of the variable in the flattened vector.
    pub offset: usize,
}

/// Read-only map `key -> (dim, offset)` with contiguous offsets in ordering order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInfo {
    entries: BTreeMap<Key, KeyInfoEntry>,
    ordering: Vec<Key>,
    total_dim: usize,
}

impl KeyInfo {
    /// Lay out variables in the given order.
    pub fn new<I>(dims: I) -> Result<Self, KError>
    where
        I: IntoIterator<Item = (Key, usize)>,
    {
        let mut info = KeyInfo::default();
        for (key, dim) in dims {
            let entry = KeyInfoEntry { index: info.ordering.len(), dim, offset: info.total_dim };
            if info.entries.insert(key, entry).is_some() {
                return Err(KError::DuplicateKey(key));
            }
            info.ordering.push(key);
            info.total_dim += dim;
        }
        Ok(info)
    }

    /// Lay out every key of `graph` in ascending key order, reading each
    /// dimension from the first factor that involves it.
    pub fn from_graph(graph: &dyn FactorGraph) -> Result<Self, KError> {
        let mut dims = Vec::new();
        for key in graph.keys() {
            let dim = graph
                .factors_touching(key)
                .iter()
                .find_map(|f| f.dim(key))
                .ok_or(KError::UnknownKey(key))?;
            dims.push((key, dim));
        }
        Self::new(dims)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.ordering.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordering.is_empty()
    }

    /// Length `n` of the flattened vector, Σ dim.
    pub fn total_dim(&self) -> usize {
        self.total_dim
    }

    pub fn entry(&self, key: Key) -> Option<&KeyInfoEntry> {
        self.entries.get(&key)
    }

    pub fn dim(&self, key: Key) -> Option<usize> {
        self.entry(key).map(|e| e.dim)
    }

    pub fn offset(&self, key: Key) -> Option<usize> {
        self.entry(key).map(|e| e.offset)
    }

    /// Keys in ordering order.
    pub fn ordering(&self) -> &[Key] {
        &self.ordering
    }

    /// Dimensions in ordering order.
    pub fn col_spec(&self) -> Vec<usize> {
        self.iter().map(|(_, e)| e.dim).collect()
    }

    /// `(key, entry)` pairs in ordering order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &KeyInfoEntry)> + '_ {
        self.ordering.iter().map(move |k| (*k, &self.entries[k]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_offsets() {
        let info = KeyInfo::new([(7, 3), (2, 6), (5, 1)]).unwrap();
        assert_eq!(info.len(), 3);
        assert_eq!(info.total_dim(), 10);
        assert_eq!(info.ordering(), &[7, 2, 5]);
        assert_eq!(info.offset(7), Some(0));
        assert_eq!(info.offset(2), Some(3));
        assert_eq!(info.offset(5), Some(9));
        assert_eq!(info.entry(2).unwrap().index, 1);
        assert_eq!(info.col_spec(), vec![3, 6, 1]);
        assert_eq!(info.dim(4), None);
    }

    #[test]
    fn duplicate_key_rejected() {
        assert_eq!(KeyInfo::new([(1, 2), (1, 3)]), Err(KError::DuplicateKey(1)));
    }

    #[test]
    fn empty() {
        let info = KeyInfo::new(Vec::new()).unwrap();
        assert!(info.is_empty());
        assert_eq!(info.total_dim(), 0);
    }
}
