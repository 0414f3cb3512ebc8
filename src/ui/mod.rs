//! Text rendering for the terminal front end.

mod display;
mod keypad;

pub use display::{render_display, render_json};
pub use keypad::render_keypad;
