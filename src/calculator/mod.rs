//! Calculator core.
//!
//! This module provides functionality to:
//! - Turn button events into edits of a pending expression
//! - Evaluate expressions using meval under an angle-mode dependent scope
//! - Format results for the display
//! - Copy the displayed value to the clipboard

mod clipboard;
mod detection;
mod evaluation;
mod format;
mod scope;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use detection::{is_constant, is_numeric_token};
pub use evaluation::{EvalError, evaluate, evaluate_in};
pub use format::{ERROR_TOKEN, format_number};
pub use scope::{AngleMode, CONSTANTS, build_scope};
pub use state::{
    CALCULATION_ERROR, CalculatorState, EMPTY_EXPRESSION, Event, MEMORY_ERROR, Snapshot,
    transition,
};
