//! Style resolution and flattening into text runs.
//!
//! The resolver walks a [`Node`] tree top-down, merging each `Styled` node's
//! partial style into the style inherited from its ancestors, and emits one
//! [`Run`] per text leaf or line break in document order.
//!
//! Nested styles merge against the previous effective style, so the innermost
//! explicit attribute wins and unset attributes fall back to the nearest
//! ancestor that set them.

use serde::Serialize;

use crate::node::Node;
use crate::style::Style;

/// A piece of text paired with its resolved style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub text: String,
    pub style: Style,
}

impl Run {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Returns `true` if this run is a line break.
    pub fn is_break(&self) -> bool {
        self.text == "\n"
    }
}

/// Flattens a tree into runs, starting from `inherited`.
///
/// Recurses once per level of nesting. Trees from [`parse`](crate::parse) are
/// at most [`MAX_DEPTH`](crate::MAX_DEPTH) elements deep.
///
/// # Example
///
/// ```rust
/// use attrmark::{parse, render, Style};
///
/// let runs = render(&parse("<i>there</i>"), &Style::default());
/// assert_eq!(runs.len(), 1);
/// assert_eq!(runs[0].text, "there ");
/// assert_eq!(runs[0].style, Style::new().italic());
/// ```
pub fn render(node: &Node, inherited: &Style) -> Vec<Run> {
    let mut runs = Vec::new();
    render_into(node, inherited, &mut runs);
    tracing::debug!(runs = runs.len(), "resolved markup tree");
    runs
}

/// Flattens a tree into runs, starting from [`Style::default`].
pub fn render_default(node: &Node) -> Vec<Run> {
    render(node, &Style::default())
}

fn render_into(node: &Node, inherited: &Style, runs: &mut Vec<Run>) {
    match node {
        Node::Sequence(children) => {
            for child in children {
                render_into(child, inherited, runs);
            }
        }
        Node::Styled { style, child } => {
            let effective = inherited.merge(style);
            render_into(child, &effective, runs);
        }
        Node::Text(text) => runs.push(Run::new(text.as_str(), inherited.clone())),
        Node::Break => runs.push(Run::new("\n", inherited.clone())),
    }
}

/// Joins adjacent runs that share a style.
///
/// The concatenated text and the style of every character are unchanged.
/// Line breaks always stay runs of their own.
pub fn coalesce(runs: Vec<Run>) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::with_capacity(runs.len());
    for run in runs {
        match out.last_mut() {
            Some(last) if last.style == run.style && !last.is_break() && !run.is_break() => {
                last.text.push_str(&run.text)
            }
            _ => out.push(run),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, FontPreset, Weight};

    #[test]
    fn test_text_uses_inherited_style() {
        let inherited = Style::new().underline();
        let runs = render(&Node::text("a"), &inherited);
        assert_eq!(runs, vec![Run::new("a ", inherited)]);
    }

    #[test]
    fn test_break_run() {
        let runs = render_default(&Node::Break);
        assert_eq!(runs, vec![Run::new("\n", Style::default())]);
        assert!(runs[0].is_break());
    }

    #[test]
    fn test_sequence_preserves_order() {
        let tree = Node::Sequence(vec![Node::text("one"), Node::Break, Node::text("two")]);
        let texts: Vec<_> = render_default(&tree).into_iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["one ", "\n", "two "]);
    }

    #[test]
    fn test_styled_merges_into_inherited() {
        let tree = Node::styled(Style::new().bold(), Node::text("x"));
        let runs = render(&tree, &Style::new().italic());
        assert_eq!(runs[0].style, Style::new().italic().bold());
    }

    #[test]
    fn test_innermost_wins() {
        let red = Color::rgba(1.0, 0.0, 0.0, 1.0);
        let green = Color::rgba(0.0, 1.0, 0.0, 1.0);
        let tree = Node::styled(
            Style::new().color(red).bold(),
            Node::styled(Style::new().color(green), Node::text("x")),
        );

        let runs = render_default(&tree);
        assert_eq!(runs[0].style.color, Some(green));
        assert_eq!(runs[0].style.weight, Some(Weight::Bold));
    }

    #[test]
    fn test_block_is_not_cleared_for_nested_content() {
        let tree = Node::styled(
            Style::preset(FontPreset::Title),
            Node::styled(Style::new().italic(), Node::text("x")),
        );
        let runs = render_default(&tree);
        assert_eq!(runs[0].style.block, Some(true));
    }

    #[test]
    fn test_empty_sequence_renders_nothing() {
        assert!(render_default(&Node::Sequence(vec![])).is_empty());
    }

    #[test]
    fn test_coalesce_joins_equal_neighbours() {
        let bold = Style::new().bold();
        let runs = vec![
            Run::new("a ", bold.clone()),
            Run::new("b ", bold.clone()),
            Run::new("c ", Style::default()),
            Run::new("d ", bold.clone()),
        ];
        assert_eq!(
            coalesce(runs),
            vec![
                Run::new("a b ", bold.clone()),
                Run::new("c ", Style::default()),
                Run::new("d ", bold),
            ]
        );
    }

    #[test]
    fn test_coalesce_keeps_breaks_separate() {
        let bold = Style::new().bold();
        let runs = vec![
            Run::new("a ", bold.clone()),
            Run::new("\n", bold.clone()),
            Run::new("\n", bold.clone()),
            Run::new("b ", bold.clone()),
            Run::new("c ", bold.clone()),
        ];
        assert_eq!(
            coalesce(runs),
            vec![
                Run::new("a ", bold.clone()),
                Run::new("\n", bold.clone()),
                Run::new("\n", bold.clone()),
                Run::new("b c ", bold),
            ]
        );
    }

    #[test]
    fn test_coalesce_empty() {
        assert!(coalesce(vec![]).is_empty());
    }
}
