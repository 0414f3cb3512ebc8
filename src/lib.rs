//! sci-calc: a button-driven scientific calculator core.
//!
//! The [`calculator`] module owns the state machine, evaluation and display
//! formatting. [`keys`] describes the keypad, [`ui`] renders state as text and
//! [`config`] loads user settings for the terminal front end.

pub mod calculator;
pub mod config;
pub mod keys;
pub mod ui;

pub use calculator::{AngleMode, CalculatorState, EvalError, Event, Snapshot, format_number};
pub use config::Config;
pub use keys::{KeyError, resolve};
