#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # essay-grader
//!
//! Command line front end for the essay scorer. Reads an essay from a file or
//! stdin and prints line-count compliance, keyword coverage and an estimated
//! rubric grade.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use essay_grader::{
    GradeError, GradeRequest, LineBounds, OutputFormat, config,
    constants::{BLANK_ESSAY_WARNING, COHESION_MARKERS},
    essay::{estimate_grammar_errors, suggest_corrections},
    grade, load_corrector,
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Arguments of the `grade` subcommand.
#[derive(Debug, Clone)]
struct GradeArgs {
    /// Comma-separated keywords
    keywords:   Option<String>,
    /// Minimum line count override
    min_lines:  Option<i64>,
    /// Maximum line count override
    max_lines:  Option<i64>,
    /// Report format override
    format:     Option<OutputFormat>,
    /// Dictionary override
    dictionary: Option<PathBuf>,
    /// Essay file, stdin when absent
    file:       Option<PathBuf>,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Score an essay
    Grade(GradeArgs),
    /// List spelling corrections (dictionary, file)
    Correct(Option<PathBuf>, Option<PathBuf>),
    /// Print the cohesion markers
    Markers,
}

/// Parsed command line.
#[derive(Debug, Clone)]
struct Options {
    /// Log at debug level
    verbose: bool,
    /// Command to run
    cmd:     Cmd,
}

/// Parse the command line arguments and return the `Options`
fn options() -> Options {
    /// parses the essay path
    fn f() -> impl Parser<Option<PathBuf>> {
        positional::<PathBuf>("FILE")
            .help("Essay to read; stdin when omitted or `-`")
            .optional()
    }

    /// parses the dictionary override
    fn d() -> impl Parser<Option<PathBuf>> {
        long("dictionary")
            .help("Word list (`word count` per line) replacing the built-in one")
            .argument::<PathBuf>("PATH")
            .optional()
    }

    let keywords = short('k')
        .long("keywords")
        .help("Keywords to look for, separated by commas")
        .argument::<String>("KEYWORDS")
        .optional();
    let min_lines = long("min-lines")
        .help("Fewest non-blank lines accepted")
        .argument::<i64>("N")
        .optional();
    let max_lines = long("max-lines")
        .help("Most non-blank lines accepted")
        .argument::<i64>("N")
        .optional();
    let format = long("format")
        .help("Report format: text, table or json")
        .argument::<OutputFormat>("FORMAT")
        .optional();
    let dictionary = d();
    let file = f();

    let grade = construct!(GradeArgs {
        keywords,
        min_lines,
        max_lines,
        format,
        dictionary,
        file
    })
    .map(Cmd::Grade)
    .to_options()
    .command("grade")
    .help("Score an essay");

    let correct = construct!(Cmd::Correct(d(), f()))
        .to_options()
        .command("correct")
        .help("Show the spelling corrections behind the grammar score");

    let markers = pure(Cmd::Markers)
        .to_options()
        .command("markers")
        .help("List the connectors counted for cohesion");

    let cmd = construct!([grade, correct, markers]);
    let verbose = short('v')
        .long("verbose")
        .help("Print debug logs")
        .switch();

    construct!(Options { verbose, cmd })
        .to_options()
        .descr("Heuristic essay grader")
        .run()
}

/// Reads the essay from `path`, or from stdin when `path` is absent or `-`.
fn read_essay(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read essay {}", path.display())),
        _ => {
            let mut essay = String::new();
            std::io::stdin()
                .read_to_string(&mut essay)
                .context("Could not read essay from stdin")?;
            Ok(essay)
        }
    }
}

/// Runs the `grade` subcommand.
fn run_grade(args: GradeArgs) -> Result<()> {
    let defaults = config::line_bounds();
    let bounds = LineBounds::new(
        args.min_lines.unwrap_or(defaults.min),
        args.max_lines.unwrap_or(defaults.max),
    );
    let format = args.format.unwrap_or_else(config::output_format);

    let essay = read_essay(args.file.as_deref())?;
    let request = GradeRequest::builder()
        .essay(essay)
        .bounds(bounds)
        .build()
        .with_keyword_text(args.keywords.as_deref().unwrap_or_default());

    let dictionary = args.dictionary.or_else(config::dictionary);
    let corrector = load_corrector(dictionary.as_deref())?;

    match grade(&request, &corrector) {
        Ok(report) => println!("{}", report.render(format)?),
        Err(GradeError::BlankEssay) => tracing::warn!("{BLANK_ESSAY_WARNING}"),
    }

    Ok(())
}

/// Runs the `correct` subcommand.
fn run_correct(dictionary: Option<PathBuf>, file: Option<PathBuf>) -> Result<()> {
    let essay = read_essay(file.as_deref())?;
    let dictionary = dictionary.or_else(config::dictionary);
    let corrector = load_corrector(dictionary.as_deref())?;

    let corrections = suggest_corrections(&essay, &corrector);
    if corrections.is_empty() {
        println!("Nenhuma correção sugerida.");
    }
    for c in &corrections {
        println!("{} -> {}", c.original, c.suggestion);
    }
    println!("Erros estimados: {}", estimate_grammar_errors(&essay, &corrector));

    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();

    let opts = options();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let level = if opts.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::registry()
        .with(fmt)
        .with(LevelFilter::from_level(level))
        .init();

    match opts.cmd {
        Cmd::Grade(args) => run_grade(args)?,
        Cmd::Correct(dictionary, file) => run_correct(dictionary, file)?,
        Cmd::Markers => {
            for marker in COHESION_MARKERS {
                println!("{marker}");
            }
        }
    };

    Ok(())
}
