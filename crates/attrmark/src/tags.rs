//! Tag vocabulary and character entities.
//!
//! Both tables are built once on first use and never modified.
//!
//! | Tag | Effect |
//! |-----|--------|
//! | `largeTitle`/`h1`, `title`/`h2`, `headline`/`h3`, `subheadline`/`h4`, `callout`/`h5`, `caption`/`h6`, `footnote` | font preset, block |
//! | `body` | font preset |
//! | `b`, `i`, `u` | bold, italic, underline |
//! | `br` | line break |
//! | `font` | `color`, `family` + `size` attributes |
//!
//! Tag names are case-sensitive. Anything else is a transparent container.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::style::{FontPreset, Style};

/// What a recognized tag name does.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TagKind {
    /// Applies a fixed partial style to the tag's content.
    Styled(Style),
    /// Emits a line break; content is ignored.
    LineBreak,
    /// Builds its style from the tag's attributes.
    Font,
}

static TAGS: Lazy<HashMap<&'static str, TagKind>> = Lazy::new(|| {
    let mut tags = HashMap::new();
    for preset in FontPreset::ALL {
        let kind = TagKind::Styled(Style::preset(preset));
        if let Some(alias) = preset.heading_alias() {
            tags.insert(alias, kind.clone());
        }
        tags.insert(preset.name(), kind);
    }
    tags.insert("b", TagKind::Styled(Style::new().bold()));
    tags.insert("i", TagKind::Styled(Style::new().italic()));
    tags.insert("u", TagKind::Styled(Style::new().underline()));
    tags.insert("br", TagKind::LineBreak);
    tags.insert("font", TagKind::Font);
    tags
});

static ENTITIES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("lt;", "<"), ("gt;", ">")]));

/// Looks up a tag name. `None` means the tag is transparent.
pub(crate) fn lookup_tag(name: &str) -> Option<&'static TagKind> {
    TAGS.get(name)
}

/// Looks up an entity name, including its trailing `;` (e.g. `"lt;"`).
pub(crate) fn lookup_entity(name: &str) -> Option<&'static str> {
    ENTITIES.get(name).copied()
}

/// Returns `true` if `name` has a meaning in the markup vocabulary.
pub fn is_known_tag(name: &str) -> bool {
    TAGS.contains_key(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Weight;

    #[test]
    fn test_heading_aliases_match_named_presets() {
        for (alias, name) in [
            ("h1", "largeTitle"),
            ("h2", "title"),
            ("h3", "headline"),
            ("h4", "subheadline"),
            ("h5", "callout"),
            ("h6", "caption"),
        ] {
            assert_eq!(lookup_tag(alias), lookup_tag(name), "{alias} vs {name}");
        }
    }

    #[test]
    fn test_body_is_not_block() {
        let Some(TagKind::Styled(style)) = lookup_tag("body") else {
            panic!("body should be a styled tag");
        };
        assert_eq!(style.block, None);
    }

    #[test]
    fn test_footnote_is_block() {
        let Some(TagKind::Styled(style)) = lookup_tag("footnote") else {
            panic!("footnote should be a styled tag");
        };
        assert!(style.is_block());
    }

    #[test]
    fn test_inline_tags() {
        assert_eq!(
            lookup_tag("b"),
            Some(&TagKind::Styled(Style::new().weight(Weight::Bold)))
        );
        assert_eq!(lookup_tag("br"), Some(&TagKind::LineBreak));
        assert_eq!(lookup_tag("font"), Some(&TagKind::Font));
    }

    #[test]
    fn test_tag_names_are_case_sensitive() {
        assert!(is_known_tag("largeTitle"));
        assert!(!is_known_tag("LargeTitle"));
        assert!(!is_known_tag("B"));
        assert!(!is_known_tag("h7"));
    }

    #[test]
    fn test_entities() {
        assert_eq!(lookup_entity("lt;"), Some("<"));
        assert_eq!(lookup_entity("gt;"), Some(">"));
        assert_eq!(lookup_entity("amp;"), None);
        assert_eq!(lookup_entity("lt"), None);
    }
}
