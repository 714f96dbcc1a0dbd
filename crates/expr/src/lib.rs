//! A restricted expression language for real functions of `x`.
//!
//! User input such as `exp(x) + x` or `math.cos(x) - x` is parsed into an
//! [`Expression`] that can be evaluated at any real `x`. Nothing outside the
//! grammar below can be expressed, so evaluating user input never runs
//! arbitrary code.
//!
//! # Grammar
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('-' | '+') unary | power
//! power  := atom (('^' | '**') unary)?
//! atom   := number | name | name '(' expr ')' | '(' expr ')'
//! ```
//!
//! Names are the variable `x`, the constants `pi`, `e` and `tau`, and the
//! functions listed in [`Func`]. Any name may carry a `math.` prefix.
//! Powers are right associative and bind tighter than unary minus, so
//! `-x^2` is `-(x^2)` and `2^3^2` is `2^9`.
//!
//! Parentheses, calls, signs and exponents may nest at most 64 levels;
//! deeper input is rejected with [`ParseError::TooDeep`].
//!
//! # Example
//!
//! ```
//! use bisect_expr::Expression;
//!
//! let f: Expression = "x**3 - 2*x - 5".parse().unwrap();
//! assert_eq!(f.eval(2.0).unwrap(), -1.0);
//! ```

mod ast;
mod error;
mod func;
mod parser;

pub use ast::Expression;
pub use error::{EvalError, ParseError};
pub use func::Func;
