use super::Step;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and report the current midpoint as the root.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
///
/// Emitted once per iteration, after the step is recorded and before the
/// stopping rule is checked.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step just recorded.
    pub step: &'a Step,
    /// Tolerance in effect for this solve.
    pub tolerance: f64,
}

impl Event<'_> {
    /// Returns true if this step meets a stopping criterion.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.step.criterion(self.tolerance).is_some()
    }
}
