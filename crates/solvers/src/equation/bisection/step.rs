#[cfg(feature = "serde")]
use serde::Serialize;

use super::Criterion;

/// An immutable record of one bisection iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Step {
    /// Position in the trace, starting at 1.
    pub index: usize,
    /// Low end of the bracket at the start of this iteration.
    pub low: f64,
    /// High end of the bracket at the start of this iteration.
    pub high: f64,
    /// Candidate root `(low + high) / 2`.
    pub midpoint: f64,
    /// Function value at the midpoint (the residual).
    pub value: f64,
    /// Distance from the previous midpoint; `None` on the first iteration.
    pub abs_error: Option<f64>,
    /// `|abs_error / midpoint|`; `None` without an absolute error or when the
    /// midpoint is exactly zero.
    pub rel_error: Option<f64>,
}

impl Step {
    pub(super) fn new(
        index: usize,
        bracket: [f64; 2],
        midpoint: f64,
        value: f64,
        previous: Option<f64>,
    ) -> Self {
        let abs_error = previous.map(|prev| (midpoint - prev).abs());

        #[allow(clippy::float_cmp)]
        let rel_error = abs_error
            .filter(|_| midpoint != 0.0)
            .map(|err| (err / midpoint).abs());

        let [low, high] = bracket;
        Self {
            index,
            low,
            high,
            midpoint,
            value,
            abs_error,
            rel_error,
        }
    }

    /// Returns the bracket `[low, high]` this iteration started from.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Returns the stopping criterion this step satisfies, if any.
    ///
    /// An exact zero always stops, even with a non-positive tolerance.
    /// Otherwise a small residual is reported ahead of a stable midpoint
    /// when both hold.
    #[must_use]
    pub fn criterion(&self, tolerance: f64) -> Option<Criterion> {
        #[allow(clippy::float_cmp)]
        if self.value == 0.0 {
            return Some(Criterion::ExactRoot);
        }
        if self.value.abs() < tolerance {
            return Some(Criterion::SmallResidual);
        }
        if self.abs_error.is_some_and(|err| err < tolerance) {
            return Some(Criterion::StableMidpoint);
        }
        None
    }
}

/// The ordered record of every iteration in one solve.
///
/// Insertion order is iteration order. A trace is read-only once the solver
/// hands it back.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    pub(super) fn push(&mut self, step: Step) {
        debug_assert_eq!(step.index, self.steps.len() + 1);
        self.steps.push(step);
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no iteration was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the step at a zero-based position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Step> {
        self.steps.get(position)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Returns all steps in iteration order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn first_step_has_no_errors() {
        let step = Step::new(1, [0.0, 2.0], 1.0, -1.0, None);
        assert_eq!(step.abs_error, None);
        assert_eq!(step.rel_error, None);
        assert_eq!(step.bracket(), [0.0, 2.0]);
    }

    #[test]
    fn later_step_computes_errors() {
        let step = Step::new(2, [1.0, 2.0], 1.5, 0.25, Some(1.0));
        assert_relative_eq!(step.abs_error.expect("abs error"), 0.5);
        assert_relative_eq!(step.rel_error.expect("rel error"), 1.0 / 3.0);
    }

    #[test]
    fn zero_midpoint_has_no_relative_error() {
        let step = Step::new(2, [-1.0, 1.0], 0.0, 0.5, Some(1.0));
        assert_relative_eq!(step.abs_error.expect("abs error"), 1.0);
        assert_eq!(step.rel_error, None);
    }

    #[test]
    fn relative_error_is_non_negative() {
        let step = Step::new(2, [-2.0, -1.0], -1.5, 0.1, Some(-1.0));
        assert_relative_eq!(step.rel_error.expect("rel error"), 0.5 / 1.5);
    }

    #[test]
    fn criterion_checks_residual_and_midpoint() {
        let tol = 1e-3;

        let far = Step::new(2, [0.0, 1.0], 0.5, 0.1, Some(0.25));
        assert_eq!(far.criterion(tol), None);

        let small_residual = Step::new(1, [0.0, 1.0], 0.5, 1e-4, None);
        assert_eq!(
            small_residual.criterion(tol),
            Some(Criterion::SmallResidual)
        );

        let stable = Step::new(9, [0.5, 0.5005], 0.50025, 0.1, Some(0.5));
        assert_eq!(stable.criterion(tol), Some(Criterion::StableMidpoint));
    }

    #[test]
    fn exact_root_stops_without_tolerance() {
        let step = Step::new(3, [-1.0, 0.0], -0.5, 0.0, Some(0.0));
        assert_eq!(step.criterion(0.0), Some(Criterion::ExactRoot));
        assert_eq!(step.criterion(-1.0), Some(Criterion::ExactRoot));
    }

    #[test]
    fn trace_preserves_order() {
        let mut trace = Trace::with_capacity(2);
        trace.push(Step::new(1, [0.0, 2.0], 1.0, -1.0, None));
        trace.push(Step::new(2, [1.0, 2.0], 1.5, 0.25, Some(1.0)));

        assert_eq!(trace.len(), 2);
        assert!(!trace.is_empty());
        assert_eq!(trace.first().map(|s| s.index), Some(1));
        assert_eq!(trace.last().map(|s| s.index), Some(2));
        assert_eq!(trace.get(1).map(|s| s.midpoint), Some(1.5));
        assert_eq!(
            trace.iter().map(|s| s.index).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!((&trace).into_iter().count(), trace.steps().len());
    }
}
