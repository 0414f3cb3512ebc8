//! Keypad catalog.
//!
//! Declarative description of every key the calculator offers and the event
//! each one emits. The calculator core never reads this table; it exists for
//! whatever front end draws the buttons and turns presses into events.

mod catalog;

pub use catalog::{MEMORY_KEYS, MODE_KEYS, PRIMARY_KEYS, SCIENTIFIC_KEYS};

use crate::calculator::{Event, is_constant, is_numeric_token};
use std::borrow::Cow;
use thiserror::Error;

/// Visual role of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    /// Digits and the decimal point
    Input,
    /// Binary arithmetic operators
    Operator,
    /// Editing actions (AC, backspace, negate, percent)
    Action,
    /// The submit key
    Equals,
    /// Functions, constants and power shortcuts
    Scientific,
    /// Memory register actions
    Memory,
    /// Angle mode toggle
    Mode,
}

/// Group a key is laid out in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Memory,
    Mode,
    Scientific,
    Primary,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 4] = [
        Section::Mode,
        Section::Memory,
        Section::Scientific,
        Section::Primary,
    ];

    /// Get the section name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Memory => "Memory",
            Self::Mode => "Mode",
            Self::Scientific => "Scientific",
            Self::Primary => "Keypad",
        }
    }

    /// Number of keys per rendered row.
    pub fn columns(self) -> usize {
        match self {
            Self::Memory | Self::Primary => 4,
            Self::Scientific => 5,
            Self::Mode => 1,
        }
    }

    /// The keys in this section.
    pub fn keys(self) -> &'static [Key] {
        match self {
            Self::Memory => MEMORY_KEYS,
            Self::Mode => MODE_KEYS,
            Self::Scientific => SCIENTIFIC_KEYS,
            Self::Primary => PRIMARY_KEYS,
        }
    }
}

/// A single key on the keypad.
#[derive(Clone, Debug)]
pub struct Key {
    /// Text printed on the key.
    pub label: &'static str,
    pub kind: KeyKind,
    pub section: Section,
    /// Extra words that select this key in a text front end.
    pub aliases: &'static [&'static str],
    event: Event,
}

impl Key {
    pub const fn new(label: &'static str, kind: KeyKind, section: Section, event: Event) -> Self {
        Self {
            label,
            kind,
            section,
            aliases: &[],
            event,
        }
    }

    /// A digit or decimal point key.
    pub const fn digit(value: &'static str) -> Self {
        Self::new(
            value,
            KeyKind::Input,
            Section::Primary,
            Event::Append(Cow::Borrowed(value)),
        )
    }

    /// A binary operator key that types `value`.
    pub const fn operator(label: &'static str, value: &'static str) -> Self {
        Self::new(
            label,
            KeyKind::Operator,
            Section::Primary,
            Event::Append(Cow::Borrowed(value)),
        )
    }

    /// A scientific key that types `value`.
    pub const fn token(label: &'static str, value: &'static str) -> Self {
        Self::new(
            label,
            KeyKind::Scientific,
            Section::Scientific,
            Event::Append(Cow::Borrowed(value)),
        )
    }

    pub const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// The event emitted when this key is pressed.
    pub fn event(&self) -> Event {
        self.event.clone()
    }

    /// The text this key types, if it is a plain append key.
    pub fn typed_value(&self) -> Option<&str> {
        match &self.event {
            Event::Append(value) => Some(&**value),
            _ => None,
        }
    }

    /// Check if `word` selects this key.
    pub fn matches(&self, word: &str) -> bool {
        self.label == word || self.aliases.contains(&word) || self.typed_value() == Some(word)
    }
}

/// A word that names no key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key '{0}'")]
    Unknown(String),
}

/// Iterate over every key in display order.
pub fn all_keys() -> impl Iterator<Item = &'static Key> {
    Section::ALL.into_iter().flat_map(|section| section.keys().iter())
}

/// Find the key selected by `word`.
pub fn find_key(word: &str) -> Option<&'static Key> {
    all_keys().find(|key| key.matches(word))
}

/// Turn a word typed in a text front end into an event.
///
/// Keys are matched first; otherwise a purely numeric word such as `12.5`, or
/// a bound constant name, is typed as a single token.
pub fn resolve(word: &str) -> Result<Event, KeyError> {
    if let Some(key) = find_key(word) {
        return Ok(key.event());
    }

    if is_numeric_token(word) || is_constant(word) {
        return Ok(Event::append(word.to_string()));
    }

    Err(KeyError::Unknown(word.to_string()))
}
