//! selkit CLI
//!
//! Builds a CSS selector from a JSON description and prints it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use selkit_selector::{RenderOptions, SelectorDescription};

/// selkit: build validated CSS selector strings
#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Build from a description file
    selkit selector.json

    # Build from inline JSON
    selkit --json '{"compound": [{"kind": "element", "value": "a"}, {"kind": "pseudo_class", "value": "hover"}]}'

    # Read the description from stdin, one space for descendants
    cat selector.json | selkit --single-space

    # Show the normalized description as well
    selkit --explain selector.json
"#)]
struct Cli {
    /// Path to a JSON selector description (stdin when omitted)
    #[arg(value_name = "FILE", conflicts_with = "json")]
    path: Option<PathBuf>,

    /// Inline JSON description instead of a file
    #[arg(long, value_name = "JSON")]
    json: Option<String>,

    /// JSON file with render options, e.g. {"descendant": "single"}
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Render the descendant combinator as a single space
    #[arg(short = 's', long)]
    single_space: bool,

    /// Print the normalized description before the selector
    #[arg(long)]
    explain: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let source = match (&cli.json, &cli.path) {
        (Some(json), _) => json.clone(),
        (None, Some(path)) => read_file(path)?,
        (None, None) => io::read_to_string(io::stdin()).context("failed to read stdin")?,
    };

    let mut options = match &cli.options {
        Some(path) => RenderOptions::from_json(&read_file(path)?)
            .with_context(|| format!("bad render options in {}", path.display()))?,
        None => RenderOptions::default(),
    };
    if cli.single_space {
        options = RenderOptions::single_space();
    }

    render_description(&source, options, cli.explain)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Build the described selector and render it, optionally preceded by the
/// description as the builder saw it.
fn render_description(source: &str, options: RenderOptions, explain: bool) -> Result<String> {
    let description = SelectorDescription::from_json(source)?;
    let selector = description.build()?;
    let rendered = selector.render(options);

    if explain {
        let normalized = selector.describe().to_json()?;
        Ok(format!("{normalized}\n{rendered}"))
    } else {
        Ok(rendered)
    }
}
