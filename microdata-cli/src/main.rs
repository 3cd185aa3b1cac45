//! Microdata extractor CLI
//!
//! Reads an HTML document and prints the microdata items it contains as
//! JSON on stdout. Diagnostics go to stderr.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use microdata::{Microdata, ParseOptions, parse_tree};
use microdata_common::net::fetch_document;
use microdata_common::url::{is_fetchable, parse_base_url};
use microdata_html::{format_tree, parse_document};
use owo_colors::OwoColorize;
use url::Url;

/// Extract HTML microdata as JSON
#[derive(Parser, Debug)]
#[command(name = "microdata")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Extract items from a web page
    microdata https://example.com/recipe.html

    # Extract from a local file, resolving URLs against its published location
    microdata -f page.html --base-url https://example.com/page.html

    # Parse inline HTML
    microdata --html '<div itemscope><span itemprop="name">Penelope</span></div>'

    # Read from stdin, single-line output
    curl -s https://example.com | microdata --compact

    # Show why a property is missing
    microdata -vv --dump-tree -f page.html
"#)]
struct Cli {
    /// URL of the document to fetch (http or https)
    #[arg(value_name = "URL", conflicts_with_all = ["html", "file"])]
    url: Option<String>,

    /// Parse HTML string directly instead of fetching or reading a file
    #[arg(long, value_name = "HTML", conflicts_with = "file")]
    html: Option<String>,

    /// Read the document from a file
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Base URL for file, inline and stdin input
    #[arg(long, value_name = "URL", default_value = "http://example.com")]
    base_url: String,

    /// Only record itemid on items that also have an itemtype
    #[arg(long)]
    strict_ids: bool,

    /// Maximum nesting of items below a top-level item
    #[arg(long, value_name = "N", default_value_t = microdata::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Do not let <base href> override the base URL
    #[arg(long)]
    ignore_base_element: bool,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Print the parsed DOM tree to stderr before extracting
    #[arg(long)]
    dump_tree: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    const fn options(&self) -> ParseOptions {
        ParseOptions::new()
            .with_id_without_type(!self.strict_ids)
            .with_max_depth(self.max_depth)
            .with_base_element(!self.ignore_base_element)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            for cause in err.chain().skip(1) {
                eprintln!("  {} {cause}", "caused by:".yellow());
            }
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` takes precedence over the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let (html, base) = load_document(cli)?;
    let tree = parse_document(&html);
    if cli.dump_tree {
        eprint!("{}", format_tree(&tree, tree.root()));
    }

    let data = parse_tree(&tree, &base, &cli.options());
    log::info!("extracted {} top-level item(s)", data.len());
    println!("{}", render(&data, cli.compact)?);
    Ok(())
}

/// Load the document text and the URL it should be resolved against.
fn load_document(cli: &Cli) -> anyhow::Result<(String, Url)> {
    if let Some(ref url) = cli.url {
        if !is_fetchable(url) {
            bail!("cannot fetch {url:?}: only http and https URLs are supported");
        }
        let document = fetch_document(url)?;
        log::debug!(
            "fetched {} ({} bytes, {})",
            document.url,
            document.body.len(),
            document.content_type.as_deref().unwrap_or("no content type")
        );
        return Ok((document.body, document.url));
    }

    let html = if let Some(ref html) = cli.html {
        html.clone()
    } else if let Some(ref path) = cli.file {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    } else {
        io::read_to_string(io::stdin()).context("reading document from stdin")?
    };
    let base = parse_base_url(&cli.base_url)
        .with_context(|| format!("invalid --base-url {:?}", cli.base_url))?;
    Ok((html, base))
}

fn render(data: &Microdata, compact: bool) -> microdata::Result<String> {
    if compact {
        data.to_json()
    } else {
        data.to_json_pretty()
    }
}
