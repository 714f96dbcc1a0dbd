use crate::EvalError;

/// The allow-list of functions an expression may call.
///
/// Each takes one argument. `log` is the natural logarithm, matching `ln`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
}

impl Func {
    const ALL: [Func; 16] = [
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Asin,
        Func::Acos,
        Func::Atan,
        Func::Sinh,
        Func::Cosh,
        Func::Tanh,
        Func::Exp,
        Func::Ln,
        Func::Log10,
        Func::Log2,
        Func::Sqrt,
        Func::Cbrt,
        Func::Abs,
    ];

    /// Looks up a function by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "log" {
            return Some(Func::Ln);
        }
        Self::ALL.into_iter().find(|func| func.name() == name)
    }

    /// Returns the canonical name of the function.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Log10 => "log10",
            Func::Log2 => "log2",
            Func::Sqrt => "sqrt",
            Func::Cbrt => "cbrt",
            Func::Abs => "abs",
        }
    }

    /// Applies the function, rejecting arguments outside its real domain.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Domain`] for arguments outside the domain and
    /// [`EvalError::Overflow`] when the result is not finite.
    pub fn apply(self, arg: f64) -> Result<f64, EvalError> {
        let domain_error = || EvalError::Domain {
            function: self.name(),
            arg,
        };

        let value = match self {
            Func::Sin => arg.sin(),
            Func::Cos => arg.cos(),
            Func::Tan => arg.tan(),
            Func::Asin | Func::Acos if !(-1.0..=1.0).contains(&arg) => return Err(domain_error()),
            Func::Asin => arg.asin(),
            Func::Acos => arg.acos(),
            Func::Atan => arg.atan(),
            Func::Sinh => arg.sinh(),
            Func::Cosh => arg.cosh(),
            Func::Tanh => arg.tanh(),
            Func::Exp => arg.exp(),
            Func::Ln | Func::Log10 | Func::Log2 if arg <= 0.0 => return Err(domain_error()),
            Func::Ln => arg.ln(),
            Func::Log10 => arg.log10(),
            Func::Log2 => arg.log2(),
            Func::Sqrt if arg < 0.0 => return Err(domain_error()),
            Func::Sqrt => arg.sqrt(),
            Func::Cbrt => arg.cbrt(),
            Func::Abs => arg.abs(),
        };

        if value.is_finite() || !arg.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::Overflow(self.name()))
        }
    }
}
