//! `attrmark` - render markup from a file or stdin to the terminal.
//!
//! ```text
//! echo '<h1>Hi</h1><br/><i>there</i>' | attrmark --output term-debug
//! ```
//!
//! Logging goes to stderr and is controlled by `ATTRMARK_LOG`
//! (e.g. `ATTRMARK_LOG=attrmark=trace` to see every dropped tag).

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use attrmark::{parse_with_diagnostics, render_default, Diagnostics};
use attrmark_render::{render_runs, OutputMode, RenderOptions};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "attrmark", version, about = "Render attrmark markup to the terminal")]
struct Cli {
    /// Markup file to render; reads stdin when omitted or `-`
    file: Option<PathBuf>,

    /// Output mode: auto, term, text, term-debug, or json
    #[arg(
        long,
        value_name = "MODE",
        default_value = "auto",
        env = "ATTRMARK_OUTPUT"
    )]
    output: OutputMode,

    /// Truncate each output line to this many columns
    #[arg(long, value_name = "COLUMNS", env = "ATTRMARK_WIDTH")]
    width: Option<usize>,

    /// Report dropped or degraded markup on stderr
    #[arg(long)]
    diagnostics: bool,

    /// Keep adjacent runs with equal styles separate
    #[arg(long)]
    no_coalesce: bool,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        let options = RenderOptions::new(self.output).coalesce(!self.no_coalesce);
        match self.width {
            Some(width) => options.width(width),
            None => options,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let markup = read_input(cli.file.as_deref())?;
    let (output, diagnostics) = render(&cli, &markup)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output).context("failed to write output")?;

    if cli.diagnostics {
        for issue in &diagnostics {
            eprintln!("{} {}", console::style("warning:").yellow().bold(), issue);
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ATTRMARK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut markup = String::new();
            io::stdin()
                .read_to_string(&mut markup)
                .context("failed to read stdin")?;
            Ok(markup)
        }
    }
}

fn render(cli: &Cli, markup: &str) -> Result<(String, Diagnostics)> {
    let (tree, diagnostics) = parse_with_diagnostics(markup);
    let runs = render_default(&tree);
    let output = render_runs(&runs, &cli.render_options())
        .with_context(|| format!("failed to render {} output", cli.output))?;
    tracing::debug!(issues = diagnostics.len(), "rendered input");
    Ok((output, diagnostics))
}
