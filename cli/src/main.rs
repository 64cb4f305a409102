//! docanchor CLI - locate text in layout annotations with parser chains

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docanchor::render::{extraction_to_text, to_json, word_listing};
use docanchor::{
    Anchor, Document, JsonFormat, PageSelection, ParserChain, ResolveOptions, Target, Template,
};

#[derive(Parser)]
#[command(name = "docanchor")]
#[command(version)]
#[command(about = "Locate text in OCR layout annotations with chained parsers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a parser chain against a document
    Resolve {
        /// Annotation JSON file
        #[arg(value_name = "DOCUMENT")]
        input: PathBuf,

        /// Parser chain: a JSON file, or inline JSON
        #[arg(short, long, value_name = "FILE|JSON")]
        parsers: String,

        /// Continue from a stored target instead of the document start
        #[arg(long, value_name = "FILE|JSON")]
        anchor: Option<String>,

        /// Match patterns case-insensitively
        #[arg(short = 'i', long)]
        ignore_case: bool,

        /// Print only the matched text
        #[arg(long)]
        value_only: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Apply a field template to one or more documents
    Extract {
        /// Annotation JSON files
        #[arg(value_name = "DOCUMENT", required = true)]
        inputs: Vec<PathBuf>,

        /// Template JSON file
        #[arg(short, long, value_name = "FILE")]
        template: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Match patterns case-insensitively
        #[arg(short = 'i', long)]
        ignore_case: bool,

        /// Print `field: value` lines instead of JSON
        #[arg(long)]
        text: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List words with their cursors and horizontal extents
    Words {
        /// Annotation JSON file
        #[arg(value_name = "DOCUMENT")]
        input: PathBuf,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Show document information
    Info {
        /// Annotation JSON file
        #[arg(value_name = "DOCUMENT")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve {
            input,
            parsers,
            anchor,
            ignore_case,
            value_only,
            compact,
        } => cmd_resolve(
            &input,
            &parsers,
            anchor.as_deref(),
            ignore_case,
            value_only,
            compact,
        ),
        Commands::Extract {
            inputs,
            template,
            output,
            ignore_case,
            text,
            compact,
        } => cmd_extract(
            &inputs,
            &template,
            output.as_deref(),
            ignore_case,
            text,
            compact,
        ),
        Commands::Words { input, pages } => cmd_words(&input, pages.as_deref()),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read a JSON argument given either as a file path or inline.
///
/// Anything that is neither an existing file nor a JSON object or array is
/// reported as a missing file.
fn read_json_arg(arg: &str) -> Result<String, Box<dyn std::error::Error>> {
    let path = Path::new(arg);
    if path.is_file() {
        return Ok(fs::read_to_string(path)?);
    }
    if arg.trim_start().starts_with(&['[', '{'][..]) {
        Ok(arg.to_string())
    } else {
        Err(format!("File not found: {}", path.display()).into())
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_resolve(
    input: &Path,
    parsers: &str,
    anchor: Option<&str>,
    ignore_case: bool,
    value_only: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ResolveOptions::new().with_case_insensitive(ignore_case);
    let chain = ParserChain::from_json(&read_json_arg(parsers)?, &options)?;
    let doc = Document::from_path(input)?;

    let target = match anchor {
        Some(arg) => {
            let anchor = Anchor::from_json(&read_json_arg(arg)?)?;
            chain.resolve_from(&doc, &anchor)
        }
        None => chain.resolve(&doc),
    };

    log::info!("{}: {}", input.display(), describe(&target));

    if value_only {
        println!("{}", target.value());
    } else {
        println!("{}", to_json(&target, json_format(compact))?);
    }

    Ok(())
}

fn cmd_extract(
    inputs: &[PathBuf],
    template: &Path,
    output: Option<&Path>,
    ignore_case: bool,
    text: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ResolveOptions::new().with_case_insensitive(ignore_case);
    let extractor = Template::from_path(template)?.compile(&options)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    if inputs.len() == 1 {
        pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    let mut results = Vec::with_capacity(inputs.len());
    for input in inputs {
        pb.set_message(input.display().to_string());
        let doc = Document::from_path(input)?;
        results.push((input, extractor.extract(&doc)));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let rendered = if text {
        results
            .iter()
            .map(|(input, extraction)| {
                if inputs.len() == 1 {
                    extraction_to_text(extraction)
                } else {
                    format!("# {}\n{}", input.display(), extraction_to_text(extraction))
                }
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    } else if let [(_, extraction)] = results.as_slice() {
        to_json(extraction, json_format(compact))?
    } else {
        let documents: Vec<_> = results
            .iter()
            .map(|(input, extraction)| {
                serde_json::json!({
                    "document": input.display().to_string(),
                    "fields": extraction,
                })
            })
            .collect();
        to_json(&documents, json_format(compact))?
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn cmd_words(input: &Path, pages: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let selection = match pages {
        Some(p) => PageSelection::parse(p)?,
        None => PageSelection::All,
    };
    let doc = Document::from_path(input)?;

    println!("{}", word_listing(&doc, &selection));
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::from_path(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Lines".bold(), doc.line_count());
    println!("{}: {}", "Phrases".bold(), doc.phrase_count());
    println!("{}: {}", "Words".bold(), doc.word_count());
    println!(
        "{}: {}",
        "Blank".bold(),
        if doc.is_blank() { "Yes" } else { "No" }
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docanchor".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Layout annotation text locator");
    println!();
    println!("License: MIT");
}

fn describe(target: &Target) -> String {
    match target.indices() {
        Some(cursor) => format!("{} at {}", target.value(), cursor),
        None => "not found".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_json_arg_inline() {
        let json = r#"[{"count":1,"method":"after","target":{"pattern":".+","unit":"word"}}]"#;
        assert_eq!(read_json_arg(json).unwrap(), json);
    }

    #[test]
    fn test_read_json_arg_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"count":1,"method":"below","target":{{"pattern":"x","unit":"phrase"}}}}"#)
            .unwrap();
        let json = read_json_arg(file.path().to_str().unwrap()).unwrap();
        let chain = ParserChain::from_json(&json, &ResolveOptions::default()).unwrap();
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_read_json_arg_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("parsers.json");
        let err = read_json_arg(missing.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().starts_with("File not found:"));
        assert!(err.to_string().contains("parsers.json"));
    }

    #[test]
    fn test_read_json_arg_inline_with_whitespace() {
        let json = "  {\"count\":1}";
        assert_eq!(read_json_arg(json).unwrap(), json);
    }

    #[test]
    fn test_json_format() {
        assert_eq!(json_format(true), JsonFormat::Compact);
        assert_eq!(json_format(false), JsonFormat::Pretty);
    }
}
