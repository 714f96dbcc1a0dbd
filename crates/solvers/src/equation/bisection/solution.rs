#[cfg(feature = "serde")]
use serde::Serialize;

use super::{Step, Trace};

/// The stopping criterion that ended a converged solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum Criterion {
    /// The midpoint evaluated to exactly zero.
    ExactRoot,
    /// `|f(midpoint)|` dropped below the tolerance.
    SmallResidual,
    /// The midpoint moved by less than the tolerance since the last iteration.
    StableMidpoint,
}

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged(Criterion),
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns true if the solver stopped on a convergence criterion.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Status::Converged(_))
    }
}

/// The result of a bisection solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Midpoint of the last recorded iteration.
    pub root: f64,
    /// Function value at `root`.
    pub residual: f64,
    /// Every iteration performed, in order.
    pub trace: Trace,
}

impl Solution {
    /// Builds a solution that reports `last` as the root.
    pub(super) fn new(last: Step, status: Status, trace: Trace) -> Self {
        Self {
            status,
            root: last.midpoint,
            residual: last.value,
            trace,
        }
    }

    /// Returns the number of iterations performed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.trace.len()
    }
}
