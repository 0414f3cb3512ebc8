//! Evaluation scope for the calculator.
//!
//! The scope is rebuilt for every evaluation from the current angle mode,
//! so a mode toggle can never leak into an evaluation that started before it.

use meval::Context;
use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI};
use std::fmt;

/// Unit used by the trigonometric functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[serde(alias = "degrees", alias = "DEG")]
    Deg,
    #[default]
    #[serde(alias = "radians", alias = "RAD")]
    Rad,
}

impl AngleMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Deg => Self::Rad,
            Self::Rad => Self::Deg,
        }
    }

    /// Short label shown on the mode toggle.
    pub fn label(self) -> &'static str {
        match self {
            Self::Deg => "DEG",
            Self::Rad => "RAD",
        }
    }

    /// Convert a trigonometric argument in this mode to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Deg => angle * PI / 180.0,
            Self::Rad => angle,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name of the function postfix `!` is rewritten to before evaluation.
pub const FACTORIAL_FN: &str = "fact";

/// Names of the constants bound in every scope.
pub const CONSTANTS: &[&str] = &["pi", "e", "E"];

/// Build the evaluator scope for the given angle mode.
///
/// Starts from the evaluator's default context and overrides every name the
/// calculator defines itself, so results do not depend on the evaluator's
/// own built-ins.
pub fn build_scope(mode: AngleMode) -> Context<'static> {
    let mut ctx = Context::new();

    ctx.var("pi", PI)
        .var("e", E)
        .var("E", E)
        .func("sin", move |x| mode.to_radians(x).sin())
        .func("cos", move |x| mode.to_radians(x).cos())
        .func("tan", move |x| mode.to_radians(x).tan())
        .func("ln", f64::ln)
        .func("log10", f64::log10)
        .func("sqrt", f64::sqrt)
        .func("abs", f64::abs)
        .func(FACTORIAL_FN, factorial);

    ctx
}

/// Factorial of a non-negative integer; NaN for anything else.
fn factorial(x: f64) -> f64 {
    if x < 0.0 || x.fract() != 0.0 {
        return f64::NAN;
    }
    // 171! overflows f64
    if x > 170.0 {
        return f64::INFINITY;
    }
    (1..=x as u64).map(|n| n as f64).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(expr: &str, mode: AngleMode) -> f64 {
        meval::eval_str_with_context(expr, build_scope(mode)).unwrap()
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(AngleMode::Deg.toggled(), AngleMode::Rad);
        assert_eq!(AngleMode::Rad.toggled().toggled(), AngleMode::Rad);
    }

    #[test]
    fn test_constants_bound() {
        assert_eq!(eval("pi", AngleMode::Rad), PI);
        assert_eq!(eval("e", AngleMode::Rad), E);
        assert_eq!(eval("E", AngleMode::Deg), E);
    }

    #[test]
    fn test_trig_in_degrees() {
        assert!((eval("sin(90)", AngleMode::Deg) - 1.0).abs() < 1e-12);
        assert!((eval("cos(180)", AngleMode::Deg) + 1.0).abs() < 1e-12);
        assert!((eval("tan(45)", AngleMode::Deg) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_trig_in_radians() {
        assert!((eval("sin(90)", AngleMode::Rad) - 90f64.sin()).abs() < 1e-12);
        assert!((eval("cos(pi)", AngleMode::Rad) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_overridden_functions() {
        assert!((eval("ln(e)", AngleMode::Rad) - 1.0).abs() < 1e-12);
        assert!((eval("log10(1000)", AngleMode::Rad) - 3.0).abs() < 1e-12);
        assert_eq!(eval("sqrt(16)", AngleMode::Rad), 4.0);
        assert_eq!(eval("abs(-2.5)", AngleMode::Rad), 2.5);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(eval("fact(0)", AngleMode::Rad), 1.0);
        assert_eq!(eval("fact(5)", AngleMode::Rad), 120.0);
        assert!(eval("fact(0.5)", AngleMode::Rad).is_nan());
        assert!(eval("fact(-3)", AngleMode::Rad).is_nan());
        assert!(eval("fact(171)", AngleMode::Rad).is_infinite());
    }

    #[test]
    fn test_labels() {
        assert_eq!(AngleMode::Deg.label(), "DEG");
        assert_eq!(AngleMode::Rad.to_string(), "RAD");
    }
}
