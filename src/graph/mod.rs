//! Graph module: linear factor types and the factor graph container.

pub mod factor;
pub mod factor_graph;

pub use factor::{HessianFactor, JacobianFactor, LinearFactor};
pub use factor_graph::GaussianFactorGraph;
