//! Verbosity tests: what the block-Jacobi build reports through `tracing`.
//!
//! Each test installs a scoped fmt subscriber writing into a shared buffer,
//! builds through the factory, and inspects the formatted events.

use std::io::Write;
use std::sync::{Arc, Mutex};

use faer::Mat;
use graphpc::{Damping, GaussianFactorGraph, JacobianFactor, KeyInfo, create_preconditioner_from_strs};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a debug-level subscriber and return everything it logged.
fn capture_logs(f: impl FnOnce()) -> String {
    let out = Captured::default();
    let writer = out.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = out.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

/// Scalars A (H = 4) and B (H = 9).
fn two_scalars() -> GaussianFactorGraph {
    let a = JacobianFactor::new(vec![(0, Mat::from_fn(1, 1, |_, _| 2.0))], vec![0.0]).unwrap();
    let b = JacobianFactor::new(vec![(1, Mat::from_fn(1, 1, |_, _| 3.0))], vec![0.0]).unwrap();
    [a, b].into_iter().collect()
}

fn build_with(verbosity: &str, info: &KeyInfo) -> (bool, String) {
    let graph = two_scalars();
    let mut pc = create_preconditioner_from_strs("block-jacobi", verbosity).unwrap();
    let mut ok = false;
    let logs = capture_logs(|| ok = pc.build(&graph, info, &Damping::new()).is_ok());
    (ok, logs)
}

#[test]
fn complexity_reports_nnz_after_build() {
    let info = KeyInfo::new([(0, 1), (1, 1)]).unwrap();
    let (ok, logs) = build_with("complexity", &info);
    assert!(ok);
    assert!(logs.contains("INFO"), "{logs}");
    assert!(logs.contains("block-jacobi preconditioner built"), "{logs}");
    assert!(logs.contains("nnz=2"), "{logs}");
}

#[test]
fn silent_build_stays_at_debug() {
    let info = KeyInfo::new([(0, 1), (1, 1)]).unwrap();
    let (ok, logs) = build_with("silent", &info);
    assert!(ok);
    assert!(logs.contains("building block-jacobi preconditioner"), "{logs}");
    assert!(!logs.contains("preconditioner built"), "{logs}");
}

#[test]
fn error_verbosity_reports_failed_build() {
    let orphan = KeyInfo::new([(0, 1), (1, 1), (2, 1)]).unwrap();
    let (ok, logs) = build_with("error", &orphan);
    assert!(!ok);
    assert!(logs.contains("ERROR"), "{logs}");
    assert!(logs.contains("block-jacobi build failed"), "{logs}");
    assert!(logs.contains("diagonal block of key 2 is not positive definite"), "{logs}");
}

#[test]
fn complexity_does_not_report_failures() {
    let orphan = KeyInfo::new([(0, 1), (1, 1), (2, 1)]).unwrap();
    let (ok, logs) = build_with("complexity", &orphan);
    assert!(!ok);
    assert!(!logs.contains("ERROR"), "{logs}");
    assert!(!logs.contains("preconditioner built"), "{logs}");
}

#[test]
fn error_verbosity_also_reports_nnz() {
    let info = KeyInfo::new([(0, 1), (1, 1)]).unwrap();
    let (ok, logs) = build_with("error", &info);
    assert!(ok);
    assert!(logs.contains("nnz=2"), "{logs}");
}
