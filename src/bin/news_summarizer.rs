//! Command-line front end: reads an article from a file or stdin and prints
//! its extractive summary with word counts.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use news_summarizer::{Summarizer, Summary, SummaryConfig};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "news-summarizer", version, about = "Extractive news article summarizer")]
struct Cli {
    /// Article to summarize; reads stdin when omitted
    file: Option<PathBuf>,

    /// Number of sentences to keep (default: max(3, sentences / 4))
    #[arg(short = 'n', long)]
    sentences: Option<usize>,

    /// Stopword language, overriding the config file
    #[arg(short, long)]
    language: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON document instead of plain text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    original_text: &'a str,
    summary: &'a str,
    original_word_count: usize,
    summary_word_count: usize,
    total_sentences: usize,
    summary_sentences: usize,
    keywords: &'a [String],
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "news_summarizer=debug"
    } else {
        "news_summarizer=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "summarization failed");
            let message = err
                .downcast_ref::<news_summarizer::Error>()
                .map_or("Unable to summarize the provided text.", |e| e.user_message());
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SummaryConfig::from_json(&raw)?
        }
        None => SummaryConfig::default(),
    };
    if let Some(language) = &cli.language {
        config.language = language.clone();
    }

    let stopwords = config.stopword_filter()?;
    let summarizer = Summarizer::from_config(&config, &stopwords)?;

    let text = read_input(cli.file.as_ref())?;
    if text.trim().is_empty() {
        eprintln!("Please provide text to summarize");
        return Ok(ExitCode::from(2));
    }

    let summary = summarizer.summarize(&text, cli.sentences)?;
    print_summary(&text, &summary, cli.json)?;
    Ok(ExitCode::SUCCESS)
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn print_summary(text: &str, summary: &Summary, json: bool) -> anyhow::Result<()> {
    if json {
        let output = Output {
            original_text: text,
            summary: &summary.text,
            original_word_count: summary.original_word_count,
            summary_word_count: summary.summary_word_count,
            total_sentences: summary.total_sentences,
            summary_sentences: summary.sentences.len(),
            keywords: &summary.keywords,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", summary.text);
        println!();
        println!(
            "Original: {} words. Summary: {} words.",
            summary.original_word_count, summary.summary_word_count
        );
    }
    Ok(())
}
