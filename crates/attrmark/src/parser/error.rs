//! Parse issues absorbed by the parser.

/// A malformed construct the parser recovered from.
///
/// Issues never abort parsing; they are reported alongside the tree by
/// [`parse_with_diagnostics`](crate::parse_with_diagnostics). Every `offset` is
/// the character index where the offending construct starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIssue {
    /// Input ended before the closing tag.
    UnclosedTag { name: String, offset: usize },
    /// The closing tag name does not match the opening one.
    MismatchedClose {
        expected: String,
        found: String,
        offset: usize,
    },
    /// A `>` was required but not found.
    MissingTagEnd { name: String, offset: usize },
    /// An attribute value is not a double-quoted string.
    MalformedAttribute { tag: String, offset: usize },
    /// A styling tag was self-closing, leaving nothing to style.
    EmptyStyledTag { name: String, offset: usize },
    /// An `&` reference that is not in the entity table.
    UnknownEntity { entity: String, offset: usize },
    /// A `color` attribute that is not `#RRGGBB` or `#RRGGBBAA`.
    InvalidColor { value: String, offset: usize },
    /// A `size` attribute that is not a finite number.
    InvalidFontSize { value: String, offset: usize },
    /// A closing tag ended the document early; the rest of the input was ignored.
    UnexpectedClose { offset: usize },
    /// A tag opened past [`MAX_DEPTH`](crate::parser::MAX_DEPTH) levels of
    /// nesting. The tag is dropped and its content joins the enclosing element.
    TooDeep { name: String, offset: usize },
}

impl ParseIssue {
    /// Character index where the offending construct starts.
    pub fn offset(&self) -> usize {
        match self {
            ParseIssue::UnclosedTag { offset, .. }
            | ParseIssue::MismatchedClose { offset, .. }
            | ParseIssue::MissingTagEnd { offset, .. }
            | ParseIssue::MalformedAttribute { offset, .. }
            | ParseIssue::EmptyStyledTag { offset, .. }
            | ParseIssue::UnknownEntity { offset, .. }
            | ParseIssue::InvalidColor { offset, .. }
            | ParseIssue::InvalidFontSize { offset, .. }
            | ParseIssue::UnexpectedClose { offset }
            | ParseIssue::TooDeep { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseIssue::UnclosedTag { name, offset } => {
                write!(f, "unclosed tag <{}> at {}", name, offset)
            }
            ParseIssue::MismatchedClose {
                expected,
                found,
                offset,
            } => write!(
                f,
                "tag <{}> at {} closed by </{}>",
                expected, offset, found
            ),
            ParseIssue::MissingTagEnd { name, offset } => {
                write!(f, "missing '>' in tag <{}> at {}", name, offset)
            }
            ParseIssue::MalformedAttribute { tag, offset } => {
                write!(f, "malformed attribute in tag <{}> at {}", tag, offset)
            }
            ParseIssue::EmptyStyledTag { name, offset } => {
                write!(f, "self-closing <{}/> at {} has no content to style", name, offset)
            }
            ParseIssue::UnknownEntity { entity, offset } => {
                write!(f, "unknown entity '&{}' at {}", entity, offset)
            }
            ParseIssue::InvalidColor { value, offset } => {
                write!(f, "invalid color '{}' at {}", value, offset)
            }
            ParseIssue::InvalidFontSize { value, offset } => {
                write!(f, "invalid font size '{}' at {}", value, offset)
            }
            ParseIssue::UnexpectedClose { offset } => {
                write!(f, "unexpected closing tag at {}, remaining input ignored", offset)
            }
            ParseIssue::TooDeep { name, offset } => {
                write!(f, "tag <{}> at {} nests too deeply, tag ignored", name, offset)
            }
        }
    }
}

impl std::error::Error for ParseIssue {}

/// Issues collected while parsing one input, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    issues: Vec<ParseIssue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, issue: ParseIssue) {
        self.issues.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseIssue> {
        self.issues.iter()
    }

    pub fn into_vec(self) -> Vec<ParseIssue> {
        self.issues
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a ParseIssue;
    type IntoIter = std::slice::Iter<'a, ParseIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}
