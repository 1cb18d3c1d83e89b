//! Ordered stage pipelines for composite validators.
//!
//! A composite validator lists its checks as a slice of [`Stage`]s. They run
//! in order and the first violation ends the run, so at most one error code
//! comes out of a pipeline.

use std::fmt;

use tracing::trace;

use super::Value;
use super::error::Violation;

/// Signature of one stage: the owning rule and the candidate value.
pub type StageFn<R> = fn(&R, &Value) -> Result<(), Violation>;

/// A named step of a composite check.
pub struct Stage<R> {
    name: &'static str,
    run: StageFn<R>,
}

impl<R> Stage<R> {
    /// Creates a stage.
    #[must_use]
    pub const fn new(name: &'static str, run: StageFn<R>) -> Self {
        Self { name, run }
    }

    /// The stage name, as it appears in trace events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<R> fmt::Debug for Stage<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

/// Runs `stages` against `value`, stopping at the first violation.
pub fn run_stages<R>(rule: &R, stages: &[Stage<R>], value: &Value) -> Result<(), Violation> {
    for stage in stages {
        if let Err(violation) = (stage.run)(rule, value) {
            trace!(stage = stage.name, code = %violation.code, "stage failed");
            return Err(violation);
        }
        trace!(stage = stage.name, "stage passed");
    }
    Ok(())
}
