mod digest;
mod error;
mod output;
mod parser;
mod settings;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{debug, info, warn};

use error::DigestError;

#[derive(Parser)]
#[command(
    name = "digest_json",
    version,
    about = "Convert a daily digest markdown file to JSON for the website"
)]
struct Cli {
    /// Digest markdown file
    input: PathBuf,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override generatedAt (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        Err(e) => e.exit(),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let t0 = Instant::now();
    let defaults = settings::Settings::load()?;
    let date = cli
        .date
        .or(defaults.date)
        .unwrap_or_else(|| Local::now().date_naive());
    let output_path = cli.output.or(defaults.output);

    let markdown = read_input(&cli.input)?;
    let digest = parser::parse_digest(&markdown, &date.format("%Y-%m-%d").to_string());
    if digest.top_picks.is_empty() && digest.categories.is_empty() {
        warn!(input = %cli.input.display(), "no top picks or categories recognised");
    }
    debug!(labels = ?digest.categories.labels().collect::<Vec<_>>(), "categories");

    let json = output::to_json(&digest)?;
    output::write(&json, output_path.as_deref())?;

    info!(
        input = %cli.input.display(),
        top_picks = digest.top_picks.len(),
        categories = digest.categories.len(),
        articles = digest.categories.article_count(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "digest converted"
    );
    Ok(())
}

fn read_input(path: &Path) -> error::Result<String> {
    fs::read_to_string(path).map_err(|source| DigestError::Read {
        path: path.to_path_buf(),
        source,
    })
}
