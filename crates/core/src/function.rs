use std::convert::Infallible as Never;

/// A real-valued function of one real variable.
///
/// Evaluation may fail, for example when a user-supplied expression hits a
/// domain error. Solvers propagate [`Function::Error`] to their caller
/// unmodified.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F: Function + ?Sized> Function for &F {
    type Error = F::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}

/// Wraps a closure that cannot fail.
///
/// Created by [`infallible`].
#[derive(Debug, Clone, Copy)]
pub struct Infallible<F>(F);

/// Wraps a closure that returns a `Result`.
///
/// Created by [`fallible`].
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(F);

/// Adapts `Fn(f64) -> f64` into a [`Function`] that never fails.
pub fn infallible<F>(f: F) -> Infallible<F>
where
    F: Fn(f64) -> f64,
{
    Infallible(f)
}

/// Adapts `Fn(f64) -> Result<f64, E>` into a [`Function`].
pub fn fallible<F, E>(f: F) -> Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    Fallible(f)
}

impl<F> Function for Infallible<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Never;

    fn call(&self, x: f64) -> Result<f64, Never> {
        Ok((self.0)(x))
    }
}

impl<F, E> Function for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, E> {
        (self.0)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[derive(Debug, PartialEq)]
    struct Negative(f64);

    impl std::fmt::Display for Negative {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "negative argument {}", self.0)
        }
    }

    impl std::error::Error for Negative {}

    #[test]
    fn infallible_closure_evaluates() {
        let square = infallible(|x| x * x);
        assert_relative_eq!(square.call(3.0).unwrap(), 9.0);
    }

    #[test]
    fn fallible_closure_passes_errors_through() {
        let root = fallible(|x: f64| if x < 0.0 { Err(Negative(x)) } else { Ok(x.sqrt()) });

        assert_relative_eq!(root.call(4.0).unwrap(), 2.0);
        assert_eq!(root.call(-1.0), Err(Negative(-1.0)));
    }

    #[test]
    fn references_are_functions() {
        fn eval_twice(f: impl Function<Error = Never>) -> f64 {
            f.call(1.0).unwrap() + f.call(2.0).unwrap()
        }

        let identity = infallible(|x| x);
        assert_relative_eq!(eval_twice(&identity), 3.0);
        assert_relative_eq!(eval_twice(identity), 3.0);
    }
}
