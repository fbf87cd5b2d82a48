//! # Attrmark Render - terminal output for styled runs
//!
//! Takes the [`Run`]s produced by [`attrmark`] and writes them as text, in one
//! of several [`OutputMode`]s:
//!
//! - **Term**: ANSI escape codes via `console` (bold, dim, italic, underline,
//!   256-color foreground)
//! - **Text**: the bare text
//! - **TermDebug**: `[bold italic]text[/]` tags showing each run's resolved style
//! - **Json**: the runs themselves, serialized
//! - **Auto**: Term when the terminal supports color, Text otherwise
//!
//! ## Example
//!
//! ```rust
//! use attrmark_render::{render_markup, OutputMode, RenderOptions};
//!
//! let out = render_markup(
//!     "<h1>Hi</h1><br/><i>there</i>",
//!     &RenderOptions::new(OutputMode::TermDebug),
//! ).unwrap();
//! assert_eq!(out, "[largeTitle block]Hi [/]\n[italic]there [/]");
//!
//! let plain = render_markup("<b>a</b> b", &RenderOptions::new(OutputMode::Text)).unwrap();
//! assert_eq!(plain, "a b ");
//! ```

mod debug;
mod error;
mod output;
mod term;
mod util;

use attrmark::{coalesce, Run};

pub use debug::describe;
pub use error::RenderError;
pub use output::{OutputMode, RenderOptions, UnknownOutputMode};
pub use term::console_style;
pub use util::{ansi256, run_width, truncate_lines};

/// Writes runs according to `options`.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render_runs(runs: &[Run], options: &RenderOptions) -> Result<String, RenderError> {
    let mut runs = match options.width {
        Some(width) => truncate_lines(runs, width),
        None => runs.to_vec(),
    };
    if options.coalesce {
        runs = coalesce(runs);
    }
    tracing::debug!(mode = %options.mode, runs = runs.len(), "writing runs");

    if options.mode.is_structured() {
        Ok(serde_json::to_string_pretty(&runs)?)
    } else if options.mode.is_debug() {
        Ok(debug::render_debug(&runs))
    } else {
        let use_color = options.mode.should_use_color();
        Ok(runs.iter().map(|run| term::apply(run, use_color)).collect())
    }
}

/// Parses, resolves and writes markup in one step.
pub fn render_markup(markup: &str, options: &RenderOptions) -> Result<String, RenderError> {
    render_runs(&attrmark::render_markup(markup), options)
}
