//! Sapling CLI
//!
//! Parses an HTML file or string and prints the element tree, the elements
//! with a given tag name, the text runs, or JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use sapling_dom::{Document, Element, print_tree};
use sapling_html::HTMLParser;

#[derive(Parser, Debug)]
#[command(name = "sapling")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the element tree of a file
    sapling page.html

    # Extract every link
    sapling page.html --tag a

    # Parse a string directly and dump it as JSON
    sapling --html '<p>Hello <b>world</b></p>' --json
"#)]
struct Cli {
    /// HTML file to parse
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse HTML string directly instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Print only the elements with this tag name ("text" for text runs)
    #[arg(short, long, value_name = "NAME")]
    tag: Option<String>,

    /// Print the non-blank text runs, one per line
    #[arg(long, conflicts_with_all = ["tag", "json"])]
    text: bool,

    /// Print as JSON instead of a tree
    #[arg(long)]
    json: bool,

    /// Do not print parse warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (source, html) = load_input(&cli)?;

    let mut parser = HTMLParser::new(&html);
    if cli.quiet {
        parser = parser.with_quiet_mode();
    }
    let document = match parser.run() {
        Ok(document) => document,
        Err(error) => {
            let (line, column) = error.line_and_column(&html);
            bail!("{source}:{line}:{column}: {error}");
        }
    };

    if cli.text {
        print_text(&document);
    } else if let Some(tag) = &cli.tag {
        let matches = document.get_elements_by_tag_name(tag);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        } else {
            print_matches(tag, &matches);
        }
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        println!("{}", "=== Element Tree ===".bold());
        for child in document.children() {
            print_tree(child, 0);
        }
    }

    Ok(())
}

/// Load the markup from `--html` or the FILE argument, with a display name
/// for error messages.
fn load_input(cli: &Cli) -> Result<(String, String)> {
    match (&cli.html, &cli.path) {
        (Some(html), _) => Ok(("<inline>".to_string(), html.clone())),
        (None, Some(path)) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path.display().to_string(), html))
        }
        (None, None) => bail!("expected a FILE or --html '<html>...</html>'"),
    }
}

fn print_text(document: &Document) {
    for run in document.get_elements_by_tag_name("text") {
        let trimmed = run.inner_text.trim();
        if !trimmed.is_empty() {
            println!("{trimmed}");
        }
    }
}

fn print_matches(tag: &str, matches: &[&Element]) {
    let header = format!("=== {} <{tag}> ===", matches.len());
    println!("{}", header.bold());
    for element in matches {
        println!("{}", element.to_debug_string());
    }
}
