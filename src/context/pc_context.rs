//! Preconditioner factory.
//!
//! Maps a [`PreconditionerParameters`] value to a constructed preconditioner.
//! Dispatch is purely on the kernel; a kernel without an implementation is
//! an error rather than a silent fallback, so callers always get the
//! strategy they asked for.
//!
//! # Example
//!
//! ```rust
//! use graphpc::{create_preconditioner, PreconditionerParameters};
//! let params = PreconditionerParameters::from_strs("block-jacobi", "silent").unwrap();
//! let pc = create_preconditioner(&params).unwrap();
//! assert_eq!(pc.nnz(), 0);
//! ```

use tracing::debug;

use crate::config::{Kernel, PreconditionerParameters};
use crate::error::KError;
use crate::preconditioner::{BlockJacobiPreconditioner, IdentityPreconditioner, Preconditioner};

/// Construct the preconditioner selected by `params`.
pub fn create_preconditioner(params: &PreconditionerParameters) -> Result<Box<dyn Preconditioner>, KError> {
    debug!(kernel = %params.kernel, verbosity = %params.verbosity, "creating preconditioner");
    match params.kernel {
        Kernel::Identity => Ok(Box::new(IdentityPreconditioner::new())),
        Kernel::BlockJacobi => Ok(Box::new(BlockJacobiPreconditioner::with_verbosity(params.verbosity))),
        Kernel::Cholmod => Err(KError::UnsupportedKernel(Kernel::Cholmod.name())),
    }
}

/// Parse configuration names and construct the preconditioner in one step.
pub fn create_preconditioner_from_strs(kernel: &str, verbosity: &str) -> Result<Box<dyn Preconditioner>, KError> {
    create_preconditioner(&PreconditionerParameters::from_strs(kernel, verbosity)?)
}
