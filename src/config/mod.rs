//! Configuration surface for preconditioners.

pub mod options;
pub use options::{Kernel, PreconditionerParameters, Verbosity};
