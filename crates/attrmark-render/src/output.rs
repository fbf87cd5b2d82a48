//! Output modes and render options.

use std::str::FromStr;

/// Controls how runs are turned into text.
///
/// # Modes
///
/// - `Auto`: ANSI styling if the terminal supports color, plain text otherwise
/// - `Term`: Always emit ANSI escape codes
/// - `Text`: Never emit escape codes
/// - `TermDebug`: Bracket tags describing each run's style, for inspection
/// - `Json`: The resolved runs serialized as JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    TermDebug,
    Json,
}

impl OutputMode {
    /// Mode names as accepted by [`FromStr`], in declaration order.
    pub const NAMES: [&'static str; 5] = ["auto", "term", "text", "term-debug", "json"];

    /// Whether ANSI escape codes should be written.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug | OutputMode::Json => false,
        }
    }

    /// Whether output describes styles with bracket tags.
    pub fn is_debug(&self) -> bool {
        matches!(self, OutputMode::TermDebug)
    }

    /// Whether output is serialized data rather than text.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::TermDebug => "term-debug",
            OutputMode::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an output mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOutputMode {
    pub name: String,
}

impl std::fmt::Display for UnknownOutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown output mode '{}', expected one of: {}",
            self.name,
            OutputMode::NAMES.join(", ")
        )
    }
}

impl std::error::Error for UnknownOutputMode {}

impl FromStr for OutputMode {
    type Err = UnknownOutputMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            "term-debug" => Ok(OutputMode::TermDebug),
            "json" => Ok(OutputMode::Json),
            _ => Err(UnknownOutputMode {
                name: s.to_string(),
            }),
        }
    }
}

/// Options for [`render_runs`](crate::render_runs).
///
/// # Example
///
/// ```rust
/// use attrmark_render::{OutputMode, RenderOptions};
///
/// let options = RenderOptions::new(OutputMode::Text).width(40);
/// assert_eq!(options.width, Some(40));
/// assert!(options.coalesce);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: OutputMode,
    /// Join adjacent runs with equal styles before output. Line breaks are
    /// never joined.
    pub coalesce: bool,
    /// Truncate each line to this many terminal columns.
    pub width: Option<usize>,
}

impl RenderOptions {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn coalesce(mut self, coalesce: bool) -> Self {
        self.coalesce = coalesce;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::Auto,
            coalesce: true,
            width: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names_round_trip() {
        for name in OutputMode::NAMES {
            let mode: OutputMode = name.parse().unwrap();
            assert_eq!(mode.to_string(), name);
        }
    }

    #[test]
    fn test_unknown_mode() {
        let err = "fancy".parse::<OutputMode>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("fancy"));
        assert!(msg.contains("term-debug"));
    }

    #[test]
    fn test_color_decisions() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::TermDebug.should_use_color());
        assert!(!OutputMode::Json.should_use_color());
        assert!(OutputMode::TermDebug.is_debug());
        assert!(OutputMode::Json.is_structured());
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.mode, OutputMode::Auto);
        assert!(options.coalesce);
        assert_eq!(options.width, None);
    }
}
