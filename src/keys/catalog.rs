//! Static keypad tables.

use super::{Key, KeyKind, Section};
use crate::calculator::Event;

/// The memory row.
pub static MEMORY_KEYS: &[Key] = &[
    Key::new("MC", KeyKind::Memory, Section::Memory, Event::MemoryClear).aliases(&["mc"]),
    Key::new("MR", KeyKind::Memory, Section::Memory, Event::MemoryRecall).aliases(&["mr"]),
    Key::new("M+", KeyKind::Memory, Section::Memory, Event::MemoryAdd).aliases(&["m+"]),
    Key::new("M-", KeyKind::Memory, Section::Memory, Event::MemorySubtract).aliases(&["m-"]),
];

/// The angle mode toggle.
pub static MODE_KEYS: &[Key] = &[Key::new(
    "DEG/RAD",
    KeyKind::Mode,
    Section::Mode,
    Event::ToggleAngleMode,
)
.aliases(&["mode", "deg", "rad", "DEG", "RAD"])];

/// The scientific keypad, five per row.
pub static SCIENTIFIC_KEYS: &[Key] = &[
    Key::token("sin", "sin(").aliases(&["sin("]),
    Key::token("cos", "cos(").aliases(&["cos("]),
    Key::token("tan", "tan(").aliases(&["tan("]),
    Key::token("ln", "ln(").aliases(&["ln("]),
    Key::token("log", "log10(").aliases(&["log10", "log10("]),
    Key::token("√", "sqrt(").aliases(&["sqrt", "sqrt("]),
    Key::new("x²", KeyKind::Scientific, Section::Scientific, Event::Square)
        .aliases(&["sq", "x^2", "^2"]),
    Key::new("xʸ", KeyKind::Scientific, Section::Scientific, Event::Power)
        .aliases(&["pow", "^"]),
    Key::token("|x|", "abs(").aliases(&["abs", "abs("]),
    Key::token("π", "pi").aliases(&["pi"]),
    Key::token("e", "e"),
    Key::token("(", "("),
    Key::token(")", ")"),
    Key::new("!", KeyKind::Scientific, Section::Scientific, Event::Factorial)
        .aliases(&["fact"]),
    Key::token("Exp", "E").aliases(&["exp", "E"]),
];

/// The main keypad, four per row.
pub static PRIMARY_KEYS: &[Key] = &[
    Key::new("AC", KeyKind::Action, Section::Primary, Event::Reset).aliases(&["ac", "clear"]),
    Key::new("⌫", KeyKind::Action, Section::Primary, Event::Backspace)
        .aliases(&["bs", "backspace", "del"]),
    Key::new("%", KeyKind::Action, Section::Primary, Event::Percent).aliases(&["percent"]),
    Key::operator("÷", "/"),
    Key::digit("7"),
    Key::digit("8"),
    Key::digit("9"),
    Key::operator("×", "*"),
    Key::digit("4"),
    Key::digit("5"),
    Key::digit("6"),
    Key::operator("−", "-"),
    Key::digit("1"),
    Key::digit("2"),
    Key::digit("3"),
    Key::operator("+", "+"),
    Key::new("±", KeyKind::Action, Section::Primary, Event::Negate)
        .aliases(&["neg", "negate", "+/-"]),
    Key::digit("0"),
    Key::digit("."),
    Key::new("=", KeyKind::Equals, Section::Primary, Event::Submit).aliases(&["equals"]),
];
