//! Calculator state machine.
//!
//! All mutation of [`CalculatorState`] goes through [`CalculatorState::apply`]
//! (or the pure [`transition`]). Each event is processed to completion; no
//! handler calls another.

use super::detection::is_duplicate_dot;
use super::evaluation::evaluate_in;
use super::format::format_number;
use super::scope::AngleMode;
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Canonical value of an empty expression.
pub const EMPTY_EXPRESSION: &str = "0";
/// Error shown when submit or percent fails.
pub const CALCULATION_ERROR: &str = "calculation error";
/// Error shown when memory add or subtract fails.
pub const MEMORY_ERROR: &str = "memory failed";

/// An input event coming from the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Append a digit, operator, function or constant token.
    Append(Cow<'static, str>),
    /// `AC`
    Reset,
    /// `⌫`
    Backspace,
    /// `±`
    Negate,
    /// `%`
    Percent,
    /// `x²`
    Square,
    /// `xʸ`
    Power,
    /// `!`
    Factorial,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    ToggleAngleMode,
    /// `=`
    Submit,
}

impl Event {
    /// Convenience constructor for [`Event::Append`].
    pub fn append(token: impl Into<Cow<'static, str>>) -> Self {
        Self::Append(token.into())
    }
}

/// The calculator's complete mutable state.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    expression: String,
    display: String,
    memory: f64,
    angle_mode: AngleMode,
    error: Option<String>,
    last_expression: Option<String>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(AngleMode::default())
    }
}

impl CalculatorState {
    /// Create a fresh session state.
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            expression: EMPTY_EXPRESSION.to_string(),
            display: EMPTY_EXPRESSION.to_string(),
            memory: 0.0,
            angle_mode,
            error: None,
            last_expression: None,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_expression(&self) -> Option<&str> {
        self.last_expression.as_deref()
    }

    /// Apply one event in place.
    pub fn apply(&mut self, event: &Event) {
        debug!(?event, expression = %self.expression, "handling event");

        match event {
            Event::Append(token) => self.edit(|prev| append_token(prev, token)),
            Event::Reset => self.reset(),
            Event::Backspace => self.edit(backspace),
            Event::Negate => self.edit(negate),
            Event::Percent => self.percent(),
            Event::Square => self.edit(|prev| format!("({prev})^2")),
            Event::Power => self.edit(|prev| format!("{prev}^")),
            Event::Factorial => self.edit(|prev| format!("{prev}!")),
            Event::MemoryClear => self.memory = 0.0,
            Event::MemoryRecall => {
                let recalled = self.memory.to_string();
                self.edit(|prev| append_token(prev, &recalled));
            }
            Event::MemoryAdd => self.update_memory(1.0),
            Event::MemorySubtract => self.update_memory(-1.0),
            Event::ToggleAngleMode => self.angle_mode = self.angle_mode.toggled(),
            Event::Submit => self.submit(),
        }
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            expression: (self.expression != self.display).then(|| self.expression.clone()),
            error: self.error.clone(),
            last_expression: self.last_expression.clone(),
            memory_indicator: self.memory != 0.0,
            angle_mode: self.angle_mode.label(),
        }
    }

    fn clear_transient_states(&mut self) {
        self.error = None;
        self.last_expression = None;
    }

    /// Apply a pure string edit; the result is also what gets displayed.
    fn edit(&mut self, updater: impl FnOnce(&str) -> String) {
        self.clear_transient_states();
        let next = updater(&self.expression);
        self.display = next.clone();
        self.expression = next;
    }

    fn reset(&mut self) {
        self.expression = EMPTY_EXPRESSION.to_string();
        self.display = EMPTY_EXPRESSION.to_string();
        self.clear_transient_states();
    }

    fn percent(&mut self) {
        self.clear_transient_states();
        let percent_expression = format!("({})/100", self.expression);

        match evaluate_in(&percent_expression, self.angle_mode) {
            Ok(value) => self.show_result(format_number(value)),
            Err(e) => {
                warn!(error = %e, "percent failed");
                self.error = Some(CALCULATION_ERROR.to_string());
            }
        }
    }

    fn update_memory(&mut self, sign: f64) {
        let updated = evaluate_in(&self.expression, self.angle_mode)
            .map(|value| self.memory + sign * value);

        match updated {
            Ok(memory) if memory.is_finite() => self.memory = memory,
            Ok(memory) => {
                warn!(memory, "memory update overflowed");
                self.error = Some(MEMORY_ERROR.to_string());
            }
            Err(e) => {
                warn!(error = %e, "memory update failed");
                self.error = Some(MEMORY_ERROR.to_string());
            }
        }
    }

    fn submit(&mut self) {
        self.clear_transient_states();
        match evaluate_in(&self.expression, self.angle_mode) {
            Ok(value) => {
                let formatted = format_number(value);
                self.last_expression = Some(std::mem::take(&mut self.expression));
                self.show_result(formatted);
            }
            Err(e) => {
                warn!(error = %e, "evaluation failed");
                self.error = Some(CALCULATION_ERROR.to_string());
            }
        }
    }

    fn show_result(&mut self, formatted: String) {
        self.display = formatted.clone();
        self.expression = formatted;
    }
}

/// Pure transition function: the state after `event` is applied to `state`.
pub fn transition(mut state: CalculatorState, event: &Event) -> CalculatorState {
    state.apply(event);
    state
}

/// What the presentation layer needs to render the display panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// Primary value.
    pub display: String,
    /// Pending expression, present only when it differs from `display`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    /// Shown in place of `display` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The expression that produced the current result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_expression: Option<String>,
    /// Memory register holds a non-zero value.
    pub memory_indicator: bool,
    pub angle_mode: &'static str,
}

fn append_token(prev: &str, token: &str) -> String {
    // Digits, constants, operators and functions all replace a lone zero.
    if prev == EMPTY_EXPRESSION {
        return if token == "." {
            "0.".to_string()
        } else {
            token.to_string()
        };
    }

    if is_duplicate_dot(prev, token) {
        return prev.to_string();
    }

    format!("{prev}{token}")
}

fn backspace(prev: &str) -> String {
    let mut chars = prev.chars();
    if chars.next_back().is_none() || chars.as_str().is_empty() {
        return EMPTY_EXPRESSION.to_string();
    }
    chars.as_str().to_string()
}

fn negate(prev: &str) -> String {
    if let Some(stripped) = prev.strip_prefix('-') {
        if stripped.is_empty() {
            return EMPTY_EXPRESSION.to_string();
        }
        return stripped.to_string();
    }
    if prev == EMPTY_EXPRESSION {
        return prev.to_string();
    }
    format!("-{prev}")
}
