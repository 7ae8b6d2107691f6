//! PDF Editor CLI tool
//!
//! A command-line tool for merging and splitting PDFs.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use log::warn;
use std::path::PathBuf;
use std::process;

use pdf_editor::pdf::extract_metadata;
use pdf_editor::{Editor, Merge, PageRange, Split};

/// PDF Editor - Merge and split PDF documents
#[derive(Parser)]
#[command(name = "pdf-editor")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Merge PDFs in the given order
    pdf-editor merge -o handout.pdf intro.pdf \"[0-9]*.pdf\"

    # Keep pages 3 to 5 (0-based, end exclusive)
    pdf-editor split doc.pdf -o excerpt.pdf --start 2 --end 5

    # Same, as a range expression
    pdf-editor split doc.pdf -o excerpt.pdf --pages 2..5")]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge multiple PDF files into one
    Merge {
        /// Input PDF files (in order). Supports glob patterns like "*.pdf"
        inputs: Vec<String>,

        /// Output PDF file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Copy a contiguous range of pages into a new PDF
    Split {
        /// Input PDF file
        input: PathBuf,

        /// Output PDF file path
        #[arg(short, long)]
        output: PathBuf,

        /// First page to keep (0-based)
        #[arg(long, default_value_t = 0, conflicts_with = "pages")]
        start: usize,

        /// First page not to keep (0-based); defaults to the end of the document
        #[arg(long, conflicts_with = "pages")]
        end: Option<usize>,

        /// Page range expression such as "2..5", "3.." or "..4"
        #[arg(long, value_parser = parse_page_range)]
        pages: Option<PageRange>,

        /// Fail on ranges outside the document instead of clamping them
        #[arg(long)]
        strict: bool,
    },

    /// Show information about a PDF file
    Info {
        /// PDF file to inspect
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::Merge { inputs, output } => cmd_merge(inputs, output),
        Commands::Split { input, output, start, end, pages, strict } => {
            let range = pages.unwrap_or(PageRange::new(start, end));
            cmd_split(input, output, range, strict)
        }
        Commands::Info { input } => cmd_info(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Parse a `--pages` expression
fn parse_page_range(text: &str) -> Result<PageRange, String> {
    text.parse().map_err(|e: pdf_editor::Error| e.to_string())
}

/// Expand glob patterns in input paths, keeping argument order
fn expand_globs(patterns: Vec<String>) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        // Check if pattern contains glob characters
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let mut matched = false;
            let entries = glob(&pattern)
                .with_context(|| format!("Invalid glob pattern: {}", pattern))?;
            for entry in entries {
                match entry {
                    Ok(path) => {
                        paths.push(path);
                        matched = true;
                    }
                    Err(e) => warn!("glob error for {}: {}", pattern, e),
                }
            }
            if !matched {
                bail!("No files matched pattern: {}", pattern);
            }
        } else {
            // No glob characters, treat as literal path
            paths.push(PathBuf::from(pattern));
        }
    }

    Ok(paths)
}

/// Merge multiple PDFs into one
fn cmd_merge(inputs: Vec<String>, output: PathBuf) -> Result<()> {
    let inputs = expand_globs(inputs)?;

    let editor = Editor::new(Merge);
    editor
        .execute_operation(&inputs, &output)
        .with_context(|| format!("Failed to merge into {}", output.display()))?;

    eprintln!("Merged {} file(s) to: {}", inputs.len(), output.display());
    Ok(())
}

/// Copy a page range of one PDF into a new file
fn cmd_split(input: PathBuf, output: PathBuf, range: PageRange, strict: bool) -> Result<()> {
    let editor = Editor::new(Split::with_range(range).strict(strict));
    editor
        .execute_operation(std::slice::from_ref(&input), &output)
        .with_context(|| format!("Failed to split {}", input.display()))?;

    eprintln!("Pages {} of {} written to: {}", range, input.display(), output.display());
    Ok(())
}

/// Show information about a PDF
fn cmd_info(input: PathBuf) -> Result<()> {
    let metadata = extract_metadata(&input)?;

    println!("File: {}", input.display());
    println!("Version: {}", metadata.version);
    println!("Pages: {}", metadata.page_count);

    if let Some(title) = metadata.title {
        println!("Title: {}", title);
    }
    if let Some(author) = metadata.author {
        println!("Author: {}", author);
    }

    Ok(())
}
