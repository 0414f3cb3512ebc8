//! Display panel rendering.
//!
//! Renders a snapshot top to bottom: indicators, the "was evaluated" hint, the
//! pending expression, then the primary value (or the error in its place).

use crate::calculator::Snapshot;

/// Marker printed before an error message.
const ERROR_MARKER: &str = "!";

/// Render the display panel as plain text lines.
pub fn render_display(snapshot: &Snapshot) -> String {
    let mut lines = Vec::with_capacity(4);

    lines.push(render_indicators(snapshot));

    if let Some(last) = &snapshot.last_expression {
        lines.push(format!("{last} ="));
    }

    if let Some(expression) = &snapshot.expression {
        lines.push(expression.clone());
    }

    lines.push(render_value(snapshot));

    lines.join("\n")
}

/// Render the snapshot as a single JSON object.
pub fn render_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string(snapshot)
}

/// Memory indicator and angle mode label, e.g. `[M] RAD`.
fn render_indicators(snapshot: &Snapshot) -> String {
    if snapshot.memory_indicator {
        format!("[M] {}", snapshot.angle_mode)
    } else {
        snapshot.angle_mode.to_string()
    }
}

fn render_value(snapshot: &Snapshot) -> String {
    match &snapshot.error {
        Some(error) => format!("{ERROR_MARKER} {error}"),
        None => snapshot.display.clone(),
    }
}
