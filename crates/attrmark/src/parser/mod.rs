//! Recursive-descent markup parser.
//!
//! The parser reads its input once, left to right, with a forward-only
//! [`Cursor`]. It never rejects input: malformed constructs are dropped and
//! parsing continues from wherever the cursor stopped. The cursor is not
//! rewound after a failed tag, so characters consumed by the failed attempt are
//! gone and the characters after it are read as ordinary content.
//!
//! # Grammar
//!
//! - `<name attr="value" ...>content</name>`: a tag element. `content` is a
//!   nested document and the closing name must match exactly.
//! - `<name attr="value" .../>`: a self-closing tag with no content.
//! - `&lt;`, `&gt;`: character entities, read up to the next whitespace.
//!   Unknown entities become empty text.
//! - Anything else up to the next `<` or `&` is free text, with whitespace
//!   collapsed and one trailing space appended.
//!
//! A `<` followed by `/` (or by end of input) ends the current document
//! without being consumed; that is how a closing tag finishes its parent.
//!
//! Elements nest at most [`MAX_DEPTH`] levels deep. A tag opened below that
//! is dropped and its content is read as part of the enclosing element, so
//! the trees this module produces can always be walked recursively.
//!
//! # Example
//!
//! ```rust
//! use attrmark::{parse, Node, Style};
//!
//! let tree = parse("<b>x</b>");
//! assert_eq!(tree, Node::styled(Style::new().bold(), Node::text("x")));
//! ```

mod cursor;
mod error;

use std::collections::HashMap;

use crate::node::Node;
use crate::style::{Color, Font, Style};
use crate::tags::{lookup_entity, lookup_tag, TagKind};

use cursor::Cursor;
pub use error::{Diagnostics, ParseIssue};

/// How many tag elements may be open at once.
pub const MAX_DEPTH: usize = 256;

/// Parses markup into a tree.
///
/// Never fails. Use [`parse_with_diagnostics`] to find out what was dropped.
pub fn parse(markup: &str) -> Node {
    parse_with_diagnostics(markup).0
}

/// Parses markup into a tree and reports every construct that was dropped or
/// degraded on the way.
///
/// The returned tree is identical to what [`parse`] returns for the same input.
///
/// # Example
///
/// ```rust
/// use attrmark::{parse_with_diagnostics, ParseIssue};
///
/// let (_, diagnostics) = parse_with_diagnostics("<b>unfinished");
/// assert!(matches!(
///     diagnostics.iter().next(),
///     Some(ParseIssue::UnclosedTag { .. })
/// ));
/// ```
pub fn parse_with_diagnostics(markup: &str) -> (Node, Diagnostics) {
    let mut parser = Parser::new(markup);
    let children = parser.parse_document();

    if !parser.cursor.at_end() {
        let offset = parser.cursor.position();
        let issue = if parser.cursor.peek() == Some('/') {
            ParseIssue::UnexpectedClose { offset }
        } else {
            ParseIssue::MissingTagEnd {
                name: String::new(),
                offset,
            }
        };
        parser.report(issue);
    }

    tracing::debug!(
        chars = parser.cursor.len(),
        nodes = children.len(),
        issues = parser.diagnostics.len(),
        "parsed markup"
    );
    (Node::from_children(children), parser.diagnostics)
}

/// Result of a successfully parsed tag element.
enum Tagged {
    Node(Node),
    /// Content of a transparent tag, spliced into the parent's siblings.
    Transparent(Vec<Node>),
}

struct Parser {
    cursor: Cursor,
    diagnostics: Diagnostics,
    /// Number of elements currently open.
    depth: usize,
}

impl Parser {
    fn new(markup: &str) -> Self {
        Self {
            cursor: Cursor::new(markup),
            diagnostics: Diagnostics::new(),
            depth: 0,
        }
    }

    fn report(&mut self, issue: ParseIssue) {
        tracing::trace!(offset = issue.offset(), "{}", issue);
        self.diagnostics.push(issue);
    }

    /// Parses siblings until end of input or a closing tag.
    fn parse_document(&mut self) -> Vec<Node> {
        let mut nodes = Vec::new();
        while let Some(c) = self.cursor.current() {
            match c {
                '<' => {
                    if matches!(self.cursor.peek(), None | Some('/')) {
                        break;
                    }
                    match self.parse_tag() {
                        Ok(Tagged::Node(node)) => nodes.push(node),
                        Ok(Tagged::Transparent(children)) => nodes.extend(children),
                        Err(issue) => self.report(issue),
                    }
                }
                '&' => nodes.push(self.parse_entity()),
                _ => {
                    let raw = self.cursor.take_while(|c| c != '<' && c != '&');
                    nodes.push(Node::text(&raw));
                }
            }
        }
        nodes
    }

    fn parse_entity(&mut self) -> Node {
        let offset = self.cursor.position();
        self.cursor.advance();
        let name = self.cursor.take_while(|c| !c.is_whitespace());
        let replacement = match lookup_entity(&name) {
            Some(replacement) => replacement,
            None => {
                self.report(ParseIssue::UnknownEntity {
                    entity: name,
                    offset,
                });
                ""
            }
        };
        Node::text(replacement)
    }

    fn parse_tag(&mut self) -> Result<Tagged, ParseIssue> {
        let offset = self.cursor.position();
        self.cursor.advance();
        let name = self.parse_tag_name();

        self.cursor.skip_whitespace();
        let mut attributes = HashMap::new();
        while self.cursor.current().is_some_and(|c| c != '>' && c != '/') {
            let key = self
                .cursor
                .take_while(|c| !c.is_whitespace() && c != '=');
            self.cursor.advance();
            let value = self
                .parse_quoted()
                .ok_or_else(|| ParseIssue::MalformedAttribute {
                    tag: name.clone(),
                    offset,
                })?;
            attributes.insert(key, value);
            self.cursor.skip_whitespace();
        }

        let content = if self.cursor.eat('/') {
            if !self.cursor.eat('>') {
                return Err(ParseIssue::MissingTagEnd { name, offset });
            }
            None
        } else {
            if !self.cursor.eat('>') {
                return Err(ParseIssue::MissingTagEnd { name, offset });
            }
            if self.depth >= MAX_DEPTH {
                return Err(ParseIssue::TooDeep { name, offset });
            }
            self.depth += 1;
            let children = self.parse_document();
            self.depth -= 1;
            if !(self.cursor.eat('<') && self.cursor.eat('/')) {
                return Err(ParseIssue::UnclosedTag { name, offset });
            }
            let closing = self.parse_tag_name();
            if closing != name {
                return Err(ParseIssue::MismatchedClose {
                    expected: name,
                    found: closing,
                    offset,
                });
            }
            if !self.cursor.eat('>') {
                return Err(ParseIssue::MissingTagEnd { name, offset });
            }
            Some(children)
        };

        self.resolve_tag(name, &attributes, content, offset)
    }

    fn parse_tag_name(&mut self) -> String {
        self.cursor
            .take_while(|c| !c.is_whitespace() && c != '/' && c != '>')
    }

    /// Reads a `"..."` literal. Quotes inside the value cannot be escaped.
    fn parse_quoted(&mut self) -> Option<String> {
        if !self.cursor.eat('"') {
            return None;
        }
        let value = self.cursor.take_while(|c| c != '"');
        self.cursor.eat('"').then_some(value)
    }

    fn resolve_tag(
        &mut self,
        name: String,
        attributes: &HashMap<String, String>,
        content: Option<Vec<Node>>,
        offset: usize,
    ) -> Result<Tagged, ParseIssue> {
        let Some(kind) = lookup_tag(&name) else {
            return Ok(Tagged::Transparent(content.unwrap_or_default()));
        };
        if *kind == TagKind::LineBreak {
            return Ok(Tagged::Node(Node::Break));
        }
        let children = content.ok_or_else(|| ParseIssue::EmptyStyledTag {
            name: name.clone(),
            offset,
        })?;
        let style = match kind {
            TagKind::Styled(style) => style.clone(),
            _ => self.font_style(attributes, offset),
        };
        Ok(Tagged::Node(Node::styled(
            style,
            Node::from_children(children),
        )))
    }

    /// Builds the partial style of a `<font>` tag from its attributes.
    fn font_style(&mut self, attributes: &HashMap<String, String>, offset: usize) -> Style {
        let mut style = Style::new();

        if let Some(value) = attributes.get("color") {
            let color = Color::from_hex(value).unwrap_or_else(|| {
                self.report(ParseIssue::InvalidColor {
                    value: value.clone(),
                    offset,
                });
                Color::TRANSPARENT
            });
            style = style.color(color);
        }

        if let (Some(family), Some(size)) = (attributes.get("family"), attributes.get("size")) {
            match parse_font_size(size) {
                Some(size) => style = style.font(Font::custom(family.as_str(), size)),
                None => self.report(ParseIssue::InvalidFontSize {
                    value: size.clone(),
                    offset,
                }),
            }
        }

        style
    }
}

fn parse_font_size(value: &str) -> Option<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|size| size.is_finite())
}
