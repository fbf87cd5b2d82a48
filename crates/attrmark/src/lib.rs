//! # Attrmark - styled text from a small HTML-like markup
//!
//! Attrmark turns markup such as `<h1>Hi</h1><b>bold</b> and <i>italic</i>`
//! into an ordered list of text runs, each paired with a fully resolved style.
//! Painting the runs is left to the caller (see the `attrmark-render` crate for
//! terminal output).
//!
//! ## Quick Start
//!
//! ```rust
//! use attrmark::{render_markup, FontPreset, Style};
//!
//! let runs = render_markup("<h1>Hi</h1><br/><i>there</i>");
//!
//! assert_eq!(runs[0].text, "Hi ");
//! assert_eq!(runs[0].style, Style::preset(FontPreset::LargeTitle));
//! assert_eq!(runs[1].text, "\n");
//! assert_eq!(runs[2].text, "there ");
//! assert_eq!(runs[2].style, Style::new().italic());
//! ```
//!
//! ## Pipeline
//!
//! 1. [`parse`] reads the markup into a [`Node`] tree. It never fails: broken
//!    tags are dropped so half-typed input still renders.
//!    [`parse_with_diagnostics`] additionally reports what was dropped.
//! 2. [`render`] walks the tree, merging each tag's partial [`Style`] into the
//!    inherited one, and emits [`Run`]s in reading order.
//!
//! ## Tags
//!
//! | Tag | Effect |
//! |-----|--------|
//! | `<h1>`..`<h6>` or `<largeTitle>`, `<title>`, `<headline>`, `<subheadline>`, `<callout>`, `<caption>` | font preset, block |
//! | `<footnote>` | font preset, block |
//! | `<body>` | font preset |
//! | `<b>`, `<i>`, `<u>` | bold, italic, underline |
//! | `<br/>` | line break |
//! | `<font color="#RRGGBB[AA]" family="..." size="...">` | color and custom font |
//!
//! Unknown tags are transparent: their content is kept without styling.
//! `&lt;` and `&gt;` decode to `<` and `>`.

pub mod node;
pub mod parser;
pub mod resolve;
pub mod style;
pub mod tags;

pub use node::Node;
pub use parser::{parse, parse_with_diagnostics, Diagnostics, ParseIssue, MAX_DEPTH};
pub use resolve::{coalesce, render, render_default, Run};
pub use style::{Color, Font, FontPreset, Style, Weight};
pub use tags::is_known_tag;

/// Parses `markup` and resolves it against the default style.
pub fn render_markup(markup: &str) -> Vec<Run> {
    render_default(&parse(markup))
}
