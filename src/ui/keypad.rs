//! Keypad rendering.

use crate::keys::{Key, Section};

/// Render every section of the keypad as an aligned grid with aliases.
pub fn render_keypad() -> String {
    Section::ALL
        .into_iter()
        .map(render_section)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_section(section: Section) -> String {
    let keys = section.keys();
    let width = keys
        .iter()
        .map(|key| key.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("{}:", section.name());
    for row in keys.chunks(section.columns()) {
        out.push_str("\n ");
        for key in row {
            out.push_str(&format!(" [{:^width$}]", key.label));
        }
    }

    let aliased: Vec<String> = keys
        .iter()
        .filter(|key| !key.aliases.is_empty())
        .map(render_aliases)
        .collect();
    if !aliased.is_empty() {
        out.push_str("\n  also: ");
        out.push_str(&aliased.join(", "));
    }

    out
}

fn render_aliases(key: &Key) -> String {
    format!("{} = {}", key.label, key.aliases.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::all_keys;

    #[test]
    fn test_keypad_lists_every_key() {
        let rendered = render_keypad();
        for key in all_keys() {
            assert!(rendered.contains(key.label), "missing {}", key.label);
        }
    }

    #[test]
    fn test_section_headers() {
        let rendered = render_keypad();
        assert!(rendered.starts_with("Mode:"));
        assert!(rendered.contains("Scientific:"));
        assert!(rendered.contains("Keypad:"));
    }

    #[test]
    fn test_primary_rows() {
        let rendered = render_section(Section::Primary);
        // header, five rows of four, alias line
        assert_eq!(rendered.lines().count(), 7);
    }
}
