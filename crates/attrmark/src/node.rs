//! The parsed markup tree.

use serde::Serialize;

use crate::style::Style;

/// One element of a parsed markup tree.
///
/// Each node exclusively owns its children, so trees are finite and acyclic by
/// construction. Equality is structural.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// Siblings rendered in order, with no style of their own.
    Sequence(Vec<Node>),
    /// A partial style applied to one subtree.
    Styled { style: Style, child: Box<Node> },
    /// A whitespace-normalized text leaf.
    Text(String),
    /// A forced line break.
    Break,
}

impl Node {
    /// Creates a text leaf, normalizing whitespace in `raw`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attrmark::Node;
    ///
    /// assert_eq!(Node::text("  a   b\n c  "), Node::Text("a b c ".into()));
    /// ```
    pub fn text(raw: &str) -> Self {
        Node::Text(normalize_whitespace(raw))
    }

    pub fn styled(style: Style, child: Node) -> Self {
        Node::Styled {
            style,
            child: Box::new(child),
        }
    }

    /// Wraps parsed siblings into a single node.
    ///
    /// A lone child is returned as-is; anything else becomes a `Sequence`.
    pub fn from_children(mut children: Vec<Node>) -> Self {
        if children.len() == 1 {
            children.remove(0)
        } else {
            Node::Sequence(children)
        }
    }

    /// Returns the concatenated text of every leaf, breaks as `\n`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Sequence(children) => children.iter().for_each(|c| c.collect_text(out)),
            Node::Styled { child, .. } => child.collect_text(out),
            Node::Text(text) => out.push_str(text),
            Node::Break => out.push('\n'),
        }
    }
}

/// Collapses whitespace runs to one space and appends a trailing space.
///
/// Leading and trailing whitespace is dropped before the trailing space is
/// added, so adjacent text leaves stay visually separated.
pub(crate) fn normalize_whitespace(raw: &str) -> String {
    let mut out = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    out.push(' ');
    out
}
