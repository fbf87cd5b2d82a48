//! The partial style record.

use serde::Serialize;

use super::{Color, Font, FontPreset, Weight};

/// A set of independently optional presentation attributes.
///
/// A `None` attribute means "inherit": it carries no value of its own and
/// falls back to whatever an enclosing style provides. There is no separate
/// "explicitly default" state.
///
/// The same type serves as the partial style attached to a tag and as the
/// effective style accumulated while walking the tree.
///
/// # Example
///
/// ```rust
/// use attrmark::{Style, Weight};
///
/// let base = Style::new().bold().italic();
/// let partial = Style::new().weight(Weight::Regular);
///
/// let merged = base.merge(&partial);
/// assert_eq!(merged.weight, Some(Weight::Regular));
/// assert_eq!(merged.italic, Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    /// Marks a style as establishing a block-level boundary (e.g. a heading).
    ///
    /// Recorded and merged like every other attribute, but the resolver does
    /// not act on it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<bool>,
}

impl Style {
    /// Creates a style with every attribute unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the style a preset tag such as `<h1>` or `<body>` applies.
    pub fn preset(preset: FontPreset) -> Self {
        let style = Self::new().font(preset);
        if preset.is_block() {
            style.block(true)
        } else {
            style
        }
    }

    pub fn font(mut self, font: impl Into<Font>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn bold(self) -> Self {
        self.weight(Weight::Bold)
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = Some(true);
        self
    }

    pub fn block(mut self, block: bool) -> Self {
        self.block = Some(block);
        self
    }

    /// Overlays `partial` on top of this style.
    ///
    /// For each attribute the result takes `partial`'s value when it is set
    /// and this style's value otherwise. Neither input is modified.
    pub fn merge(&self, partial: &Style) -> Style {
        Style {
            font: partial.font.clone().or_else(|| self.font.clone()),
            weight: partial.weight.or(self.weight),
            color: partial.color.or(self.color),
            italic: partial.italic.or(self.italic),
            underline: partial.underline.or(self.underline),
            block: partial.block.or(self.block),
        }
    }

    /// Returns the style nested content should start from.
    ///
    /// Identical to this style except that `block` is forced to `false`: a
    /// block boundary belongs to the node that introduced it only.
    pub fn propagate_to_child(&self) -> Style {
        Style {
            block: Some(false),
            ..self.clone()
        }
    }

    /// Returns `true` if no attribute is set.
    pub fn is_unset(&self) -> bool {
        *self == Style::default()
    }

    /// Returns `true` if this style establishes a block boundary.
    pub fn is_block(&self) -> bool {
        self.block == Some(true)
    }
}
