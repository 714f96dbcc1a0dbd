use std::{f64::consts, fmt, str::FromStr};

use bisect_core::Function;

use crate::{
    EvalError, Func, ParseError,
    parser::{self, BinOp, ParseNode},
};

/// Resolved expression tree.
#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Number(f64),
    X,
    Neg(Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    /// `first op1 a op2 b ...`, evaluated left to right.
    Chain(Box<Expr>, Vec<(BinOp, Expr)>),
    Call(Func, Box<Expr>),
}

/// A parsed function of the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Expr,
}

impl Expression {
    /// Parses `source` into an expression.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is not a valid expression or uses
    /// a name outside the allow-list.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let node = parser::parse(source)?;
        Ok(Self {
            source: source.trim().to_string(),
            root: lower(node)?,
        })
    }

    /// Returns the source text the expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] on division by zero, a math domain error,
    /// a negative base with a fractional exponent, or overflow.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.root.eval(x)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Function for Expression {
    type Error = EvalError;

    fn call(&self, x: f64) -> Result<f64, EvalError> {
        self.eval(x)
    }
}

/// Resolves names in a parse tree against the variable, constants and
/// function allow-list.
fn lower(node: ParseNode) -> Result<Expr, ParseError> {
    match node {
        ParseNode::Number(value) => Ok(Expr::Number(value)),
        ParseNode::Name(name) => match name.as_str() {
            "x" => Ok(Expr::X),
            "pi" => Ok(Expr::Number(consts::PI)),
            "e" => Ok(Expr::Number(consts::E)),
            "tau" => Ok(Expr::Number(consts::TAU)),
            _ if Func::from_name(&name).is_some() => Err(ParseError::MissingCall(name)),
            _ => Err(ParseError::UnknownIdentifier(name)),
        },
        ParseNode::Call(name, arg) => {
            let func = Func::from_name(&name).ok_or(ParseError::UnknownFunction(name))?;
            Ok(Expr::Call(func, Box::new(lower(*arg)?)))
        }
        ParseNode::Neg(inner) => Ok(Expr::Neg(Box::new(lower(*inner)?))),
        ParseNode::Pow(base, exponent) => Ok(Expr::Pow(
            Box::new(lower(*base)?),
            Box::new(lower(*exponent)?),
        )),
        ParseNode::Chain(first, rest) => {
            let rest = rest
                .into_iter()
                .map(|(op, node)| Ok((op, lower(node)?)))
                .collect::<Result<Vec<_>, ParseError>>()?;
            Ok(Expr::Chain(Box::new(lower(*first)?), rest))
        }
    }
}

impl Expr {
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Expr::Number(value) => Ok(*value),
            Expr::X => Ok(x),
            Expr::Neg(inner) => Ok(-inner.eval(x)?),
            Expr::Call(func, arg) => func.apply(arg.eval(x)?),
            Expr::Pow(base, exponent) => pow(base.eval(x)?, exponent.eval(x)?),
            Expr::Chain(first, rest) => rest
                .iter()
                .try_fold(first.eval(x)?, |acc, (op, rhs)| op.apply(acc, rhs.eval(x)?)),
        }
    }
}

impl BinOp {
    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            BinOp::Add => Ok(lhs + rhs),
            BinOp::Sub => Ok(lhs - rhs),
            BinOp::Mul => Ok(lhs * rhs),
            BinOp::Div if rhs == 0.0 => Err(EvalError::DivisionByZero),
            BinOp::Div => Ok(lhs / rhs),
        }
    }
}

fn pow(base: f64, exponent: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(EvalError::ComplexPower { base, exponent });
    }

    let value = base.powf(exponent);
    if value.is_finite() || !base.is_finite() || !exponent.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::Overflow("^"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(source: &str, x: f64) -> Result<f64, EvalError> {
        Expression::parse(source).expect("valid expression").eval(x)
    }

    #[test]
    fn evaluates_arithmetic() {
        assert_relative_eq!(eval("1 + 2 * x", 3.0).unwrap(), 7.0);
        assert_relative_eq!(eval("(1 + 2) * x", 3.0).unwrap(), 9.0);
        assert_relative_eq!(eval("8 / 4 / 2", 0.0).unwrap(), 1.0);
        assert_relative_eq!(eval("8 - 4 - 2", 0.0).unwrap(), 2.0);
        assert_relative_eq!(eval("2^3^2", 0.0).unwrap(), 512.0);
        assert_relative_eq!(eval("-x^2", 3.0).unwrap(), -9.0);
        assert_relative_eq!(eval("x**-1", 4.0).unwrap(), 0.25);
    }

    #[test]
    fn evaluates_functions_and_constants() {
        assert_relative_eq!(eval("math.exp(x) + x", 0.0).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eval("sin(pi / 2)", 0.0).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eval("ln(e)", 0.0).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eval("log(e^2)", 0.0).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(eval("tau / pi", 0.0).unwrap(), 2.0);
        assert_relative_eq!(eval("sqrt(abs(x))", -16.0).unwrap(), 4.0);
    }

    #[test]
    fn odd_power_of_negative_base_is_real() {
        assert_relative_eq!(eval("x^3", -2.0).unwrap(), -8.0);
        assert_relative_eq!(eval("x**3 - 2*x - 5", 2.0).unwrap(), -1.0);
    }

    #[test]
    fn reports_evaluation_errors() {
        assert_eq!(eval("1 / x", 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(eval("x^-1", 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(
            eval("sqrt(x)", -4.0),
            Err(EvalError::Domain {
                function: "sqrt",
                arg: -4.0
            })
        );
        assert_eq!(
            eval("x^0.5", -4.0),
            Err(EvalError::ComplexPower {
                base: -4.0,
                exponent: 0.5
            })
        );
        assert_eq!(eval("10^x", 400.0), Err(EvalError::Overflow("^")));
    }

    #[test]
    fn reports_unknown_names() {
        assert_eq!(
            Expression::parse("y + 1"),
            Err(ParseError::UnknownIdentifier("y".to_string()))
        );
        assert_eq!(
            Expression::parse("__import__(x)"),
            Err(ParseError::UnknownFunction("__import__".to_string()))
        );
        assert_eq!(
            Expression::parse("sin + 1"),
            Err(ParseError::MissingCall("sin".to_string()))
        );
        assert_eq!(
            Expression::parse("x(2)"),
            Err(ParseError::UnknownFunction("x".to_string()))
        );
    }

    #[test]
    fn mixed_operator_runs_evaluate_left_to_right() {
        assert_relative_eq!(eval("8 - 4 + 2", 0.0).unwrap(), 6.0);
        assert_relative_eq!(eval("8 / 4 * 2", 0.0).unwrap(), 4.0);
        assert_eq!(eval("1 + 1 / (x - 1)", 1.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn long_sums_evaluate() {
        let source = vec!["x"; 100_000].join(" + ");
        let expr = Expression::parse(&source).expect("flat sum");
        assert_relative_eq!(expr.eval(0.5).unwrap(), 50_000.0);
    }

    #[test]
    fn deep_nesting_is_a_parse_error() {
        let source = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
        assert!(matches!(
            Expression::parse(&source),
            Err(ParseError::TooDeep { .. })
        ));
    }

    #[test]
    fn displays_trimmed_source() {
        let expr: Expression = "  exp(x) + x ".parse().expect("valid expression");
        assert_eq!(expr.to_string(), "exp(x) + x");
        assert_eq!(expr.source(), "exp(x) + x");
    }

    #[test]
    fn implements_function() {
        let expr = Expression::parse("x^2 - 2").expect("valid expression");
        assert_relative_eq!(expr.call(3.0).unwrap(), 7.0);
    }
}
