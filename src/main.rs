use std::{fs, path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use rankscrape::{export_csv, fetch_document, Chart, FetchOptions, RankingScraper};

#[derive(Parser)]
#[command(name = "rankscrape", about = "Scrape a ranking chart into CSV and a bubble chart")]
struct Cli {
    /// URL of the ranking page
    #[arg(short, long, default_value = "http://www.imdb.com/chart/top")]
    url: String,

    /// Read the page from a local HTML file instead of fetching it
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory for result.csv and scatter.html
    #[arg(short, long)]
    path: PathBuf,

    /// Render the bubble chart
    #[arg(short, long, default_value_t = true, action = clap::ArgAction::Set)]
    graph: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("LOGLEVEL")
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let (html, source) = match &cli.input {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            (html, None)
        }
        None => {
            let options = FetchOptions {
                timeout_secs: cli.timeout,
                ..FetchOptions::default()
            };
            (fetch_document(&cli.url, &options)?, Some(cli.url.as_str()))
        }
    };

    let scraper = RankingScraper::new(&html, source, None)?;
    let extraction = scraper.parse();

    fs::create_dir_all(&cli.path)
        .with_context(|| format!("creating {}", cli.path.display()))?;
    export_csv(&extraction.table, cli.path.join("result.csv"))?;

    if cli.graph {
        let rendered = Chart::from_table(&extraction.table)
            .and_then(|chart| chart.write_html(cli.path.join("scatter.html")));
        if let Err(e) = rendered {
            tracing::error!(error = %e, "chart not written");
        }
    }

    println!(
        "Extracted {} records ({} rows skipped) in {:.1}s",
        extraction.table.len(),
        extraction.diagnostics.len(),
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}
