//! Core types shared by graphs and preconditioners.

use std::collections::BTreeMap;

pub mod key_info;
pub mod traits;

pub use key_info::{KeyInfo, KeyInfoEntry};
pub use traits::{FactorGraph, GaussianFactor};

/// Opaque variable identifier (pose, landmark, ...).
pub type Key = u64;

/// Levenberg–Marquardt damping: per-variable vectors added to the diagonal of
/// each Hessian block. Missing keys mean zero damping.
pub type Damping = BTreeMap<Key, Vec<f64>>;
