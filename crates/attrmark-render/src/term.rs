//! ANSI rendering through `console`.

use attrmark::{Font, FontPreset, Run, Style, Weight};

use crate::util::ansi256;

/// Converts a resolved style into a `console` style.
///
/// Terminals have one font, so presets only influence emphasis: the three
/// largest headings render bold, captions and footnotes render dim. An
/// explicit weight overrides the preset's boldness. Fully transparent colors
/// are skipped, as is `block`.
pub fn console_style(style: &Style) -> console::Style {
    let preset = style.font.as_ref().and_then(Font::preset);
    let mut out = console::Style::new();

    let heavy = matches!(
        preset,
        Some(FontPreset::LargeTitle | FontPreset::Title | FontPreset::Headline)
    );
    let bold = match style.weight {
        Some(Weight::Bold) => true,
        Some(Weight::Regular) => false,
        None => heavy,
    };
    if bold {
        out = out.bold();
    }
    if matches!(preset, Some(FontPreset::Caption | FontPreset::Footnote)) {
        out = out.dim();
    }
    if style.italic == Some(true) {
        out = out.italic();
    }
    if style.underline == Some(true) {
        out = out.underlined();
    }
    if let Some(color) = style.color.filter(|c| !c.is_transparent()) {
        out = out.color256(ansi256(color));
    }
    out
}

/// Writes one run, with escape codes when `use_color` is set.
pub(crate) fn apply(run: &Run, use_color: bool) -> String {
    if !use_color || run.is_break() {
        return run.text.clone();
    }
    console_style(&run.style)
        .force_styling(true)
        .apply_to(&run.text)
        .to_string()
}
