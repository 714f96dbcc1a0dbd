//! Plain-text rendering of bisection results.
//!
//! Output is uncolored so it can be piped or compared in tests; the binary
//! adds color on top.

use bisect_solvers::equation::bisection::{Criterion, Solution, Status, Step};

/// Scientific notation with three decimals and a signed exponent of at
/// least two digits, e.g. `-1.000e+00` or `2.500e-01`.
#[must_use]
pub fn sci(value: f64) -> String {
    let text = format!("{value:.3e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        // inf and NaN have no exponent.
        None => text,
    }
}

/// Formats an optional error estimate, using `n/a` when it is undefined.
fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), sci)
}

/// Renders one iteration as four lines of text.
#[must_use]
pub fn step(step: &Step) -> String {
    format!(
        "Iteration {}\n\
         a = {}, b = {}\n\
         c = {:.10}, f(c) = {}\n\
         abs error = {}, rel error = {}",
        step.index,
        step.low,
        step.high,
        step.midpoint,
        sci(step.value),
        optional(step.abs_error),
        optional(step.rel_error),
    )
}

/// Describes why a solve stopped.
#[must_use]
pub fn status(status: Status) -> &'static str {
    match status {
        Status::Converged(Criterion::ExactRoot) => "exact root found",
        Status::Converged(Criterion::SmallResidual) => "converged: |f(c)| below tolerance",
        Status::Converged(Criterion::StableMidpoint) => "converged: midpoint stable within tolerance",
        Status::MaxIters => "iteration limit reached without converging",
        Status::StoppedByObserver => "stopped early",
    }
}

/// Renders the final result line shown after the last step.
#[must_use]
pub fn finished(solution: &Solution) -> String {
    let iters = solution.iters();
    format!(
        "Done! approximate root ≈ {:.10}\n{} after {iters} iteration{}",
        solution.root,
        status(solution.status),
        if iters == 1 { "" } else { "s" },
    )
}

/// Renders the whole trace as a table, one row per iteration.
#[must_use]
pub fn table(solution: &Solution) -> String {
    let header = format!(
        "{:>4}  {:>14}  {:>14}  {:>16}  {:>11}  {:>10}  {:>10}",
        "k", "a", "b", "c", "f(c)", "abs err", "rel err"
    );
    let rule = "-".repeat(header.len());
    let rows = solution.trace.iter().map(|step| {
        format!(
            "{:>4}  {:>14.8}  {:>14.8}  {:>16.10}  {:>11}  {:>10}  {:>10}\n",
            step.index,
            step.low,
            step.high,
            step.midpoint,
            sci(step.value),
            optional(step.abs_error),
            optional(step.rel_error),
        )
    });

    let mut out = format!("{header}\n{rule}\n");
    out.extend(rows);
    out.push_str(&finished(solution));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use bisect_core::infallible;
    use bisect_solvers::equation::bisection::{self, Config};

    fn sqrt2(max_iters: usize) -> Solution {
        let f = infallible(|x: f64| x * x - 2.0);
        let config = Config {
            tolerance: 1e-6,
            max_iters,
        };
        bisection::solve_unobserved(&f, [0.0, 2.0], &config).expect("valid bracket")
    }

    #[test]
    fn first_step_has_no_error_estimates() {
        let solution = sqrt2(3);
        let text = step(solution.trace.first().expect("step"));
        assert_eq!(
            text,
            "Iteration 1\n\
             a = 0, b = 2\n\
             c = 1.0000000000, f(c) = -1.000e+00\n\
             abs error = n/a, rel error = n/a"
        );
    }

    #[test]
    fn later_step_shows_error_estimates() {
        let solution = sqrt2(3);
        let text = step(solution.trace.get(1).expect("step"));
        assert_eq!(
            text,
            "Iteration 2\n\
             a = 1, b = 2\n\
             c = 1.5000000000, f(c) = 2.500e-01\n\
             abs error = 5.000e-01, rel error = 3.333e-01"
        );
    }

    #[test]
    fn finished_reports_root_and_status() {
        let solution = sqrt2(3);
        assert_eq!(
            finished(&solution),
            "Done! approximate root ≈ 1.2500000000\n\
             iteration limit reached without converging after 3 iterations"
        );
    }

    #[test]
    fn table_has_a_row_per_step() {
        let solution = sqrt2(4);
        let text = table(&solution);
        let lines: Vec<_> = text.lines().collect();

        // Header, rule, four rows, and the two result lines.
        assert_eq!(lines.len(), 8);
        assert!(lines[0].trim_start().starts_with('k'));
        assert!(lines[2].trim_start().starts_with("1 "));
        assert!(lines[5].contains("1.3750000000"));
        assert!(lines[6].starts_with("Done!"));
    }

    #[test]
    fn scientific_exponent_is_signed_and_padded() {
        assert_eq!(sci(-1.0), "-1.000e+00");
        assert_eq!(sci(0.25), "2.500e-01");
        assert_eq!(sci(12_340.0), "1.234e+04");
        assert_eq!(sci(1e-100), "1.000e-100");
        assert_eq!(sci(0.0), "0.000e+00");
        assert_eq!(sci(f64::INFINITY), "inf");
    }

    #[test]
    fn status_descriptions_are_distinct() {
        let all = [
            Status::Converged(Criterion::ExactRoot),
            Status::Converged(Criterion::SmallResidual),
            Status::Converged(Criterion::StableMidpoint),
            Status::MaxIters,
            Status::StoppedByObserver,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(status(*a), status(*b));
            }
        }
    }
}
