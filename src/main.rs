//! docexport — generate a Markdown reference from `/** ... */` doc comments.
//!
//! Reads one source file, collects every comment block that precedes a
//! function body, and writes `doc-export.md` to the working directory:
//!
//! ```text
//! docexport src/Visualizer.pde
//! ```

mod error;
mod model;
mod parser;
mod render;
mod slug;

use anyhow::{Context, Result};
use clap::Parser;
use error::BuildError;
use parser::merge::DocSet;
use render::Renderer;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(
    name = "docexport",
    about = "Generate a Markdown reference from annotated doc comments"
)]
struct Cli {
    /// Source file to document. Without it an empty reference is written.
    path: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let docs = match cli.path.as_deref() {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            info!(path = %path.display(), bytes = content.len(), "read source");
            collect(&content)?
        }
        None => {
            println!("No path given");
            DocSet::new()
        }
    };

    let renderer = render::markdown::MarkdownRenderer;
    write_output(&renderer, &docs)
}

/// Build the record set, printing the mismatch report before failing.
fn collect(content: &str) -> Result<DocSet> {
    match parser::parse(content) {
        Ok(docs) => {
            debug!(records = docs.len(), "parsed");
            Ok(docs)
        }
        Err(err @ BuildError::ParamMismatch { .. }) => {
            println!("{}", err.diagnostic());
            Err(err.into())
        }
    }
}

fn write_output(renderer: &dyn Renderer, docs: &DocSet) -> Result<()> {
    println!("Generating docs...");
    let out_path = renderer.file_name();
    let output = renderer.render(docs.records());
    fs::write(out_path, output).with_context(|| format!("failed to write {}", out_path))?;
    info!(path = out_path, records = docs.len(), "wrote reference");
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
