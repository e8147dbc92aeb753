//! Context module for graphpc.
//!
//! This module provides the factory that turns configuration values into
//! preconditioner objects. The outer optimizer builds a
//! [`PreconditionerParameters`](crate::config::PreconditionerParameters),
//! asks the factory for a `Box<dyn Preconditioner>`, then calls `build` once
//! per linearization and `solve`/`transpose_solve` inside its CG loop.
//!
//! Modules:
//! - [`pc_context`]: `create_preconditioner` and its string-driven variant.
//!
//! # References
//! - Saad, Y. (2003). Iterative Methods for Sparse Linear Systems. SIAM.

pub mod pc_context;
pub use pc_context::{create_preconditioner, create_preconditioner_from_strs};
