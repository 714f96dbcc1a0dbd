use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`] or validating bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s): [{low}, {high}]")]
    NonFinite { low: f64, high: f64 },
    /// Function values at the endpoints do not have opposite signs.
    #[error("no sign change: f({low}) = {low_value}, f({high}) = {high_value}")]
    NoSignChange {
        low: f64,
        high: f64,
        low_value: f64,
        high_value: f64,
    },
}

/// Current bracket bounds and the sign of `f` at the low end.
///
/// Only the low-end sign is cached: narrowing compares it against the sign at
/// the new midpoint, so `f` is never re-evaluated at an endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    low: f64,
    high: f64,
    low_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from ordered bounds and the function values there.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` unless the values have strictly
    /// opposite signs, which rejects same-sign values and endpoint roots alike.
    pub(super) fn new(
        bounds: Bounds,
        low_value: f64,
        high_value: f64,
    ) -> Result<Self, BracketError> {
        let low_sign = Sign::of(low_value);
        if !low_sign.opposes(Sign::of(high_value)) {
            return Err(BracketError::NoSignChange {
                low: bounds.low,
                high: bounds.high,
                low_value,
                high_value,
            });
        }

        Ok(Self {
            low: bounds.low,
            high: bounds.high,
            low_sign,
        })
    }

    /// Returns the bracket bounds as `[low, high]`.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Narrows the bracket to the half that keeps the sign change.
    ///
    /// If the signs at `low` and `x` strictly oppose, `x` becomes the new high
    /// end; otherwise (including `value == 0.0`) it becomes the new low end.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        let sign = Sign::of(value);
        if self.low_sign.opposes(sign) {
            self.high = x;
        } else {
            self.low = x;
            self.low_sign = sign;
        }
    }
}

/// The sign of a function value for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Returns the sign of a non-NaN value.
    pub(super) fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Returns true if the product of two values with these signs is negative.
    pub(super) fn opposes(self, other: Sign) -> bool {
        matches!(
            (self, other),
            (Sign::Negative, Sign::Positive) | (Sign::Positive, Sign::Negative)
        )
    }
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    low: f64,
    high: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NonFinite` if either endpoint is NaN or infinite.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite { low: a, high: b });
        }

        if a <= b {
            Ok(Self { low: a, high: b })
        } else {
            Ok(Self { low: b, high: a })
        }
    }

    /// Returns the bounds as `[low, high]`.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }
}
