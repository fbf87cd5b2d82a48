//! Font descriptors and weights.

use serde::Serialize;

/// A named text style, from the largest heading down to footnotes.
///
/// Presets describe intent rather than concrete metrics; the downstream
/// renderer decides what a `Headline` actually looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FontPreset {
    LargeTitle,
    Title,
    Headline,
    Subheadline,
    Body,
    Callout,
    Caption,
    Footnote,
}

impl FontPreset {
    /// All presets, largest first.
    pub const ALL: [FontPreset; 8] = [
        FontPreset::LargeTitle,
        FontPreset::Title,
        FontPreset::Headline,
        FontPreset::Subheadline,
        FontPreset::Body,
        FontPreset::Callout,
        FontPreset::Caption,
        FontPreset::Footnote,
    ];

    /// Returns the markup tag name of this preset (e.g. `"largeTitle"`).
    pub fn name(self) -> &'static str {
        match self {
            FontPreset::LargeTitle => "largeTitle",
            FontPreset::Title => "title",
            FontPreset::Headline => "headline",
            FontPreset::Subheadline => "subheadline",
            FontPreset::Body => "body",
            FontPreset::Callout => "callout",
            FontPreset::Caption => "caption",
            FontPreset::Footnote => "footnote",
        }
    }

    /// Returns the numbered heading alias (`"h1"`..`"h6"`), if the preset has one.
    pub fn heading_alias(self) -> Option<&'static str> {
        match self {
            FontPreset::LargeTitle => Some("h1"),
            FontPreset::Title => Some("h2"),
            FontPreset::Headline => Some("h3"),
            FontPreset::Subheadline => Some("h4"),
            FontPreset::Callout => Some("h5"),
            FontPreset::Caption => Some("h6"),
            FontPreset::Body | FontPreset::Footnote => None,
        }
    }

    /// Whether a tag selecting this preset starts a block-level boundary.
    ///
    /// Every preset except `body` is a block style.
    pub fn is_block(self) -> bool {
        !matches!(self, FontPreset::Body)
    }
}

impl std::fmt::Display for FontPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The font attribute of a style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    /// One of the named text styles.
    Preset(FontPreset),
    /// A font family at an explicit point size.
    Custom { family: String, size: f32 },
}

impl Font {
    /// Creates a custom font descriptor.
    pub fn custom(family: impl Into<String>, size: f32) -> Self {
        Font::Custom {
            family: family.into(),
            size,
        }
    }

    /// Returns the preset, if this is a preset font.
    pub fn preset(&self) -> Option<FontPreset> {
        match self {
            Font::Preset(preset) => Some(*preset),
            Font::Custom { .. } => None,
        }
    }
}

impl From<FontPreset> for Font {
    fn from(preset: FontPreset) -> Self {
        Font::Preset(preset)
    }
}

impl std::fmt::Display for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Font::Preset(preset) => write!(f, "{}", preset),
            Font::Custom { family, size } => write!(f, "{}@{}", family, size),
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Regular,
    Bold,
}
