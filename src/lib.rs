//! graphpc: pluggable PCG preconditioners for factor-graph least squares
//!
//! This crate provides the preconditioning layer used by the iterative
//! linear solver inside a nonlinear least-squares optimizer (SLAM, bundle
//! adjustment): an abstract `S` operator with `solve`, `transpose_solve` and
//! `build`, an identity baseline, a block-Jacobi kernel over per-variable
//! dense Cholesky factors, and a factory driven by configuration names.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod graph;
pub mod logger;
pub mod preconditioner;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::context::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::graph::*;
pub use crate::logger::{init_logger, init_logger_with_level, init_test_logger};
pub use crate::preconditioner::*;
