use bisect_solvers::equation::bisection::{Solution, Step};

/// A cursor over the trace of one completed solve.
///
/// The cursor always points at a recorded step unless the trace is empty,
/// which a solver never produces. Moving past either end is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceViewer {
    expression: String,
    solution: Solution,
    cursor: usize,
}

impl TraceViewer {
    /// Creates a viewer positioned at the first step.
    pub fn new(expression: impl Into<String>, solution: Solution) -> Self {
        Self {
            expression: expression.into(),
            solution,
            cursor: 0,
        }
    }

    /// The expression text that was solved.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Returns the step under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Step> {
        self.solution.trace.get(self.cursor)
    }

    /// Advances one step; returns false if already at the last step.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Moves back one step; returns false if already at the first step.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn first(&mut self) {
        self.cursor = 0;
    }

    pub fn last(&mut self) {
        self.cursor = self.len().saturating_sub(1);
    }

    /// One-based position of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor + 1
    }

    /// Number of steps in the trace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solution.iters()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solution.trace.is_empty()
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.len()
    }

    /// True once the final step is on screen and the result can be shown.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.is_empty() && self.is_last()
    }
}
