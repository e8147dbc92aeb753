//! Preconditioner parameters and their string translation.
//!
//! This module provides the `PreconditionerParameters` struct, used by the
//! outer optimizer to pick a preconditioner kernel and how loudly it reports.
//! Both fields translate to and from human-readable names so they can be read
//! from configuration files:
//!
//! - kernel: `identity`, `block-jacobi`, `cholmod` (reserved, experimental)
//! - verbosity: `silent`, `complexity`, `error`
//!
//! Parsing is case-insensitive; printing always uses the lowercase names.

use std::fmt;
use std::str::FromStr;

use crate::error::KError;

/// Preconditioner kernel selector.
///
/// Kernel-specific parameters are carried by the variants themselves, so a
/// single value is enough for the factory to construct the strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kernel {
    /// No preconditioning, S = I.
    Identity,
    /// Per-variable dense diagonal blocks, each Cholesky-factorized.
    #[default]
    BlockJacobi,
    /// External sparse-Cholesky backed kernel. Accepted by the parser,
    /// rejected by the factory.
    Cholmod,
}

impl Kernel {
    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Identity => "identity",
            Kernel::BlockJacobi => "block-jacobi",
            Kernel::Cholmod => "cholmod",
        }
    }

    /// Whether the kernel is experimental and has no implementation here.
    pub fn is_experimental(&self) -> bool {
        matches!(self, Kernel::Cholmod)
    }
}

impl FromStr for Kernel {
    type Err = KError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" => Ok(Kernel::Identity),
            "block-jacobi" => Ok(Kernel::BlockJacobi),
            "cholmod" => Ok(Kernel::Cholmod),
            _ => Err(KError::UnknownKernel(s.to_string())),
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How much a preconditioner reports while building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    #[default]
    Silent,
    /// Report block count and stored nonzeros after each build.
    Complexity,
    /// Report factorization failures (and complexity).
    Error,
}

impl Verbosity {
    pub fn name(&self) -> &'static str {
        match self {
            Verbosity::Silent => "silent",
            Verbosity::Complexity => "complexity",
            Verbosity::Error => "error",
        }
    }
}

impl FromStr for Verbosity {
    type Err = KError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Verbosity::Silent),
            "complexity" => Ok(Verbosity::Complexity),
            "error" => Ok(Verbosity::Error),
            _ => Err(KError::UnknownVerbosity(s.to_string())),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Preconditioner kernel & reporting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreconditionerParameters {
    /// Which strategy the factory constructs.
    pub kernel: Kernel,
    /// Reporting level of the constructed preconditioner.
    pub verbosity: Verbosity,
}

impl PreconditionerParameters {
    pub fn new(kernel: Kernel, verbosity: Verbosity) -> Self {
        Self { kernel, verbosity }
    }

    /// Parameters for the no-op baseline.
    pub fn identity() -> Self {
        Self::new(Kernel::Identity, Verbosity::Silent)
    }

    /// Parameters for the block-Jacobi kernel.
    pub fn block_jacobi() -> Self {
        Self::new(Kernel::BlockJacobi, Verbosity::Silent)
    }

    /// Parse both fields from their configuration names.
    pub fn from_strs(kernel: &str, verbosity: &str) -> Result<Self, KError> {
        Ok(Self::new(kernel.parse()?, verbosity.parse()?))
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }
}

impl fmt::Display for PreconditionerParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PreconditionerParameters")?;
        writeln!(f, "kernel:        {}", self.kernel)?;
        writeln!(f, "verbosity:     {}", self.verbosity)
    }
}
