//! Bracket-tag rendering for inspecting resolved styles.

use attrmark::{Run, Style, Weight};

/// Describes a style as space-separated labels, e.g. `bold italic #ff0000ff`.
///
/// Returns an empty string for a style with nothing set to show. An explicit
/// `Regular` weight and a `false` flag are shown as `regular` and `no-<flag>`
/// so that overrides stay visible.
pub fn describe(style: &Style) -> String {
    let mut labels: Vec<String> = Vec::new();
    if let Some(font) = &style.font {
        labels.push(font.to_string());
    }
    match style.weight {
        Some(Weight::Bold) => labels.push("bold".into()),
        Some(Weight::Regular) => labels.push("regular".into()),
        None => {}
    }
    for (name, flag) in [
        ("italic", style.italic),
        ("underline", style.underline),
        ("block", style.block),
    ] {
        match flag {
            Some(true) => labels.push(name.into()),
            Some(false) => labels.push(format!("no-{}", name)),
            None => {}
        }
    }
    if let Some(color) = style.color {
        labels.push(color.to_hex());
    }
    labels.join(" ")
}

/// Renders runs as `[labels]text[/]`, leaving unstyled runs and breaks bare.
pub(crate) fn render_debug(runs: &[Run]) -> String {
    let mut out = String::new();
    for run in runs {
        if run.style.is_unset() || run.is_break() {
            out.push_str(&run.text);
        } else {
            out.push_str(&format!("[{}]{}[/]", describe(&run.style), run.text));
        }
    }
    out
}
