//! Expression evaluation using meval.
//!
//! Wraps meval to provide a simple interface for evaluating a calculator
//! expression against a scope and rejecting anything that is not a finite
//! real number.

use super::scope::{AngleMode, FACTORIAL_FN, build_scope};
use meval::Context;
use thiserror::Error;
use tracing::debug;

/// Why an expression could not be turned into a displayable number.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// The evaluator failed to parse or evaluate the expression.
    #[error("invalid expression '{expression}': {message}")]
    Invalid { expression: String, message: String },
    /// The expression evaluated to NaN or an infinity.
    #[error("expression '{expression}' has no finite value ({value})")]
    NonFinite { expression: String, value: f64 },
}

impl EvalError {
    /// The expression that failed.
    pub fn expression(&self) -> &str {
        match self {
            Self::Invalid { expression, .. } => expression,
            Self::NonFinite { expression, .. } => expression,
        }
    }
}

/// Evaluate `expression` against an explicit scope.
///
/// The full string is parsed on every call; nothing is cached. Postfix `!`
/// is rewritten to a call of the scope's factorial function first, since meval
/// has no factorial operator.
pub fn evaluate(expression: &str, scope: &Context<'_>) -> Result<f64, EvalError> {
    let rewritten = expand_factorials(expression);
    let value =
        meval::eval_str_with_context(&rewritten, scope).map_err(|e| EvalError::Invalid {
            expression: expression.to_string(),
            message: e.to_string(),
        })?;

    if !value.is_finite() {
        return Err(EvalError::NonFinite {
            expression: expression.to_string(),
            value,
        });
    }

    debug!(expression, value, "evaluated expression");
    Ok(value)
}

/// Evaluate `expression` with a scope freshly built for `mode`.
pub fn evaluate_in(expression: &str, mode: AngleMode) -> Result<f64, EvalError> {
    evaluate(expression, &build_scope(mode))
}

/// Rewrite every `<operand>!` as `fact(<operand>)`.
///
/// The operand is the number or name right before the `!`, or the
/// parenthesised group there together with any function name in front of it.
/// A `!` with no operand is left alone for the parser to reject.
fn expand_factorials(expression: &str) -> String {
    let mut out = String::with_capacity(expression.len() + 8);

    for c in expression.chars() {
        if c != '!' {
            out.push(c);
            continue;
        }

        match factorial_operand_start(&out) {
            Some(start) => {
                let operand = out.split_off(start);
                out.push_str(FACTORIAL_FN);
                out.push('(');
                out.push_str(&operand);
                out.push(')');
            }
            None => out.push(c),
        }
    }

    out
}

/// Byte offset where the operand ending at the end of `text` starts.
fn factorial_operand_start(text: &str) -> Option<usize> {
    let mut end = text.len();

    if text.ends_with(')') {
        let mut depth = 0usize;
        let mut open = None;
        for (i, b) in text.bytes().enumerate().rev() {
            match b {
                b')' => depth += 1,
                b'(' => {
                    depth -= 1;
                    if depth == 0 {
                        open = Some(i);
                        break;
                    }
                }
                _ => {}
            }
        }
        end = open?;
    }

    let start = text[..end]
        .trim_end_matches(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        .len();

    (start < text.len()).then_some(start)
}
