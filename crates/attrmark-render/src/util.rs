//! Color quantization and width-aware truncation.

use attrmark::{Color, Run};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Maps a color to the nearest index of the ANSI 256-color palette.
///
/// Alpha is ignored. Grays use the 24-step gray ramp, everything else the
/// 6x6x6 color cube.
///
/// # Example
///
/// ```rust
/// use attrmark::Color;
/// use attrmark_render::ansi256;
///
/// assert_eq!(ansi256(Color::rgba(1.0, 0.0, 0.0, 1.0)), 196);
/// assert_eq!(ansi256(Color::rgba(0.0, 1.0, 0.0, 0.5)), 46);
/// ```
pub fn ansi256(color: Color) -> u8 {
    let [r, g, b, _] = color.to_rgba8();
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            level => 232 + ((level as u16 - 8) * 24 / 247) as u8,
        };
    }
    let cube = |c: u8| (c as u16 * 5 / 255) as u8;
    16 + 36 * cube(r) + 6 * cube(g) + cube(b)
}

/// Terminal display width of a run's text.
pub fn run_width(run: &Run) -> usize {
    run.text.width()
}

/// Truncates every line of `runs` to `max_width` columns.
///
/// Lines are separated by break runs. A line that fits is kept unchanged;
/// a line that does not is cut so that it fits together with a trailing `…`,
/// which takes the style of the run it interrupts.
pub fn truncate_lines(runs: &[Run], max_width: usize) -> Vec<Run> {
    let mut out = Vec::with_capacity(runs.len());
    for line in runs.split_inclusive(Run::is_break) {
        let (content, brk) = match line.split_last() {
            Some((last, rest)) if last.is_break() => (rest, Some(last)),
            _ => (line, None),
        };
        if content.iter().map(run_width).sum::<usize>() <= max_width {
            out.extend_from_slice(content);
        } else {
            truncate_line(content, max_width.saturating_sub(1), &mut out);
        }
        out.extend(brk.cloned());
    }
    out
}

fn truncate_line(content: &[Run], limit: usize, out: &mut Vec<Run>) {
    let mut used = 0;
    for run in content {
        let mut text = String::new();
        for c in run.text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > limit {
                text.push('…');
                out.push(Run::new(text, run.style.clone()));
                return;
            }
            text.push(c);
            used += w;
        }
        out.push(Run::new(text, run.style.clone()));
    }
}
