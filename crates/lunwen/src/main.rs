use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use lunwen::wordcount::SectionCheck;
use lunwen::{
  analyze_advanced, analyze_basic, AdvancedAnalysisResult, AnalysisMode, AnalysisResult, BasicStats, Config,
  OutputFormat, TextError, TextSuggestion,
};

const TOTAL_WIDTH: usize = 60;

/// Lunwen - Chinese essay analysis
#[derive(Parser)]
#[command(name = "lunwen")]
#[command(about = "Segmentation, statistics, scoring and error detection for Chinese essays")]
#[command(version)]
struct Cli {
  /// Files to analyze (reads stdin if none provided)
  #[arg(value_name = "PATH")]
  paths: Vec<PathBuf>,

  /// Analyzer to run (defaults to the configured mode)
  #[arg(short, long, value_enum)]
  mode: Option<AnalysisMode>,

  /// Output format (defaults to the configured format)
  #[arg(short, long, value_enum)]
  format: Option<OutputFormat>,

  /// Configuration file path
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Check each text against this section's configured length limits
  #[arg(short, long)]
  section: Option<String>,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Analysis {
  Basic(AnalysisResult),
  Advanced(Box<AdvancedAnalysisResult>),
}

#[derive(Serialize)]
struct Report {
  source: String,
  analysis: Analysis,
  #[serde(skip_serializing_if = "Option::is_none")]
  section: Option<SectionCheck>,
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  match run(&cli) {
    Ok(true) => {}
    Ok(false) => process::exit(1),
    Err(e) => {
      eprintln!("{} {:#}", "error:".red().bold(), e);
      process::exit(2);
    }
  }
}

fn init_logging(verbose: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if verbose {
      EnvFilter::new("lunwen=debug,warn")
    } else {
      EnvFilter::new("warn")
    }
  });

  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
}

/// Returns false when any text falls outside its section limits
fn run(cli: &Cli) -> Result<bool> {
  let config = match &cli.config {
    Some(path) => Config::load_from_file(path)?,
    None => Config::load()?,
  };
  let mode = cli.mode.unwrap_or(config.mode);
  let format = cli.format.unwrap_or(config.format);
  let bounds = cli.section.as_deref().map(|name| config.section(name)).transpose()?;

  let mut reports = Vec::new();
  for (source, text) in read_inputs(&cli.paths)? {
    tracing::info!(source = %source, ?mode, "analyzing");
    let analysis = match mode {
      AnalysisMode::Basic => Analysis::Basic(analyze_basic(&text)),
      AnalysisMode::Advanced => Analysis::Advanced(Box::new(analyze_advanced(&text))),
    };
    let section = bounds.map(|bounds| bounds.check(&text));
    reports.push(Report { source, analysis, section });
  }

  match format {
    OutputFormat::Json => {
      let json = if reports.len() == 1 {
        serde_json::to_string_pretty(&reports[0])?
      } else {
        serde_json::to_string_pretty(&reports)?
      };
      println!("{json}");
    }
    OutputFormat::Pretty => {
      for report in &reports {
        print_report(report, cli.section.as_deref());
      }
    }
  }

  Ok(reports.iter().all(|report| report.section.map_or(true, |check| check.within_bounds)))
}

fn read_inputs(paths: &[PathBuf]) -> Result<Vec<(String, String)>> {
  if paths.is_empty() {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input).context("Failed to read stdin")?;
    return Ok(vec![("<stdin>".to_string(), input)]);
  }

  paths
    .iter()
    .map(|path| {
      let text =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
      Ok((path.display().to_string(), text))
    })
    .collect()
}

fn print_report(report: &Report, section_name: Option<&str>) {
  println!("{}", report.source.purple().bold());
  println!("{}", "=".repeat(TOTAL_WIDTH));

  match &report.analysis {
    Analysis::Basic(result) => {
      print_stats(&result.stats);
      print_score("readability", result.readability);
      print_keywords(&result.keywords);
      print_errors(&result.errors);
      print_suggestions(&result.suggestions);
    }
    Analysis::Advanced(result) => {
      print_stats(&result.basic);
      print_score("readability", result.readability);
      print_score("coherence", result.coherence);
      print_score("topic relevance", result.topic_relevance);
      print_score("structure", result.structure.structure_score);
      print_keywords(&result.keywords);
      if !result.word_frequency.is_empty() {
        let top: Vec<String> =
          result.word_frequency.iter().map(|entry| format!("{}×{}", entry.token, entry.count)).collect();
        println!("{:<18}{}", "frequency", top.join(" "));
      }
      print_errors(&result.errors);
      print_suggestions(&result.suggestions);
    }
  }

  if let (Some(check), Some(name)) = (report.section, section_name) {
    let verdict = if check.within_bounds { "ok".green() } else { "out of range".red() };
    println!(
      "{:<18}{} ({} chars, limits {}-{}) {}",
      "section",
      name,
      check.count,
      check.min_words,
      check.max_words,
      verdict
    );
  }

  println!();
}

fn print_stats(stats: &BasicStats) {
  println!(
    "{:<18}{} chars, {} words, {} sentences, {} paragraphs",
    "counts", stats.char_count, stats.word_count, stats.sentence_count, stats.paragraph_count
  );
  println!("{:<18}{}", "avg sentence", stats.avg_sentence_length);
}

fn print_score(label: &str, score: u32) {
  let text = score.to_string();
  let colored_score = if score >= 80 {
    text.green()
  } else if score >= 60 {
    text.yellow()
  } else {
    text.red()
  };
  println!("{:<18}{}", label, colored_score);
}

fn print_keywords(keywords: &[String]) {
  if !keywords.is_empty() {
    println!("{:<18}{}", "keywords", keywords.join("、"));
  }
}

fn print_errors(errors: &[TextError]) {
  if errors.is_empty() {
    return;
  }
  println!("{}", format!("errors ({})", errors.len()).red().bold());
  for error in errors {
    println!("  @{}+{} {}", error.position, error.length, error.message);
    println!("    {}", error.suggestion.dimmed());
  }
}

fn print_suggestions(suggestions: &[TextSuggestion]) {
  if suggestions.is_empty() {
    return;
  }
  println!("{}", format!("suggestions ({})", suggestions.len()).cyan().bold());
  for suggestion in suggestions {
    println!("  - {}", suggestion.message);
  }
}
