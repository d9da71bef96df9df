use anyhow::{Context, Result};
use chandas_core::core::metrics::DEFAULT_PADA_PARTS;
use chandas_core::export::{save_csv, DEFAULT_CSV_NAME};
use chandas_core::{report, AnalyzerConfig, ProsodyAnalyzer, VerseAnalysis};
use clap::Parser;
use crossterm::style::Stylize;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "chandas")]
#[command(about = "Laghu/Guru, entropy, transition and Pingala analysis of a Devanagari verse")]
struct Args {
    /// Verse text. Reads verses from stdin, one per line, when omitted.
    verse: Vec<String>,

    /// Read the verse from a file instead
    #[arg(short, long, conflicts_with = "verse")]
    file: Option<PathBuf>,

    /// Also write the Index,Syllable,L/G table to this CSV file
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_CSV_NAME)]
    csv: Option<PathBuf>,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Number of padas to split the verse into
    #[arg(long, default_value_t = DEFAULT_PADA_PARTS, value_parser = parse_parts)]
    parts: usize,

    /// Disable colored headings
    #[arg(long)]
    no_color: bool,
}

fn parse_parts(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let analyzer = ProsodyAnalyzer::with_config(AnalyzerConfig {
        pada_parts: args.parts,
    });

    let verse = if let Some(path) = &args.file {
        Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("could not read verse from '{}'", path.display()))?,
        )
    } else if !args.verse.is_empty() {
        Some(args.verse.join(" "))
    } else {
        None
    };

    match verse {
        Some(text) => run_once(&analyzer, &args, &text),
        None => run_interactive(&analyzer, &args),
    }
}

fn run_once(analyzer: &ProsodyAnalyzer, args: &Args, text: &str) -> Result<()> {
    match analyzer.analyze_input(text) {
        Some(analysis) => emit(&analysis, args),
        None => {
            eprintln!("Nothing to analyze: the verse is empty.");
            Ok(())
        }
    }
}

fn run_interactive(analyzer: &ProsodyAnalyzer, args: &Args) -> Result<()> {
    println!("Sanskrit Chandas & Prosody Analyzer. Enter a verse per line, 'exit' to quit.");
    println!("---------------------------------------------------------------------------");
    prompt()?;

    for line in stdin().lock().lines() {
        let line = line.context("could not read stdin")?;
        if line.trim() == "exit" {
            break;
        }
        if let Some(analysis) = analyzer.analyze_input(&line) {
            emit(&analysis, args)?;
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("\n> ");
    stdout().flush()?;
    Ok(())
}

fn emit(analysis: &VerseAnalysis, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(analysis)?);
    } else {
        print_report(analysis, args.no_color);
    }

    if let Some(path) = &args.csv {
        save_csv(&analysis.segmentation, path)
            .with_context(|| format!("could not write CSV to '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "csv written");
        if !args.json {
            println!("CSV saved to '{}'", path.display());
        }
    }
    Ok(())
}

fn print_report(analysis: &VerseAnalysis, no_color: bool) {
    for section in report::sections(analysis) {
        if no_color {
            println!("{}", section.title);
        } else {
            println!("{}", section.title.bold().cyan());
        }
        println!("{}\n", section.body);
    }
}
