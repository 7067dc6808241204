use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use marketmood::aggregate::{Aggregator, CompanyAnalysis};
use marketmood::config;
use marketmood::error::MarketMoodError;
use marketmood::news::{NewsItem, NewsRetriever};
use marketmood::registry::{Company, TickerDirectory};
use marketmood::report::{self, ReportAssembler, ReportWriter};
use marketmood::sentiment::SentimentScorer;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze news sentiment for a country's listed companies
    Analyze {
        /// Country whose listed companies should be analyzed
        country: String,
        /// Directory the report is written to (overrides configuration)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Check configuration and registry connectivity
    Init,
    /// Print the company summary of a previously saved report
    Show {
        /// Path to a saved report artifact
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    info!("Starting MarketMood - company news sentiment reports");

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze { country, output }) => {
            run_analysis(&country, output).await?;
        }
        Some(Commands::Init) => {
            config::initialize_config().await?;
        }
        Some(Commands::Show { path }) => {
            show_report(&path)?;
        }
        None => {
            info!("No command specified. Use --help for available commands.");
        }
    }

    Ok(())
}

async fn run_analysis(country: &str, output: Option<PathBuf>) -> Result<()> {
    info!("Loading configuration...");
    let mut config = config::load_config().await?;
    if let Some(output_dir) = output {
        config.output_dir = output_dir;
    }

    // Initialize components
    let directory = TickerDirectory::new(&config)?;
    let retriever = NewsRetriever::new(&config)?;
    let scorer = SentimentScorer::new();
    let aggregator = Aggregator::new();
    let assembler = ReportAssembler::new();
    let writer = ReportWriter::new(&config);

    // Roster resolution failure is fatal: without a roster there is nothing
    // to process and no artifact is written.
    let companies = directory.fetch_roster(country).await?;
    if companies.is_empty() {
        warn!("No companies listed for {}; the report will be empty", country);
    }

    // Fetch each company's feed with bounded concurrency. `buffered` yields
    // in roster order, so the report comes out identical to a sequential run,
    // and the first retrieval failure aborts the whole run.
    let retriever_ref = &retriever;
    let fetched: Vec<(Company, Vec<NewsItem>)> =
        stream::iter(companies.into_iter().map(move |company| async move {
            let items = retriever_ref.fetch_news(&company.ticker).await?;
            Ok::<_, MarketMoodError>((company, items))
        }))
        .buffered(config.fetch_concurrency)
        .try_collect()
        .await?;

    // Score and aggregate in roster order
    let mut analyses = Vec::with_capacity(fetched.len());
    for (company, items) in fetched {
        let articles = items
            .iter()
            .map(|item| scorer.score_item(item))
            .collect::<marketmood::Result<Vec<_>>>()?;
        let aggregate = aggregator.aggregate(&company, &articles);
        analyses.push(CompanyAnalysis {
            company,
            articles,
            aggregate,
        });
    }

    let report = assembler.assemble(country, &analyses);
    let path = writer.write(&report)?;

    info!(
        "Sentiment analysis completed for {}: {} companies, {} articles ({})",
        country,
        report.company_summary.len(),
        report.article_sentiment.len(),
        path.display()
    );

    Ok(())
}

fn show_report(path: &Path) -> Result<()> {
    let report = report::read_report(path)?;

    println!(
        "{} - generated {} ({} companies, {} articles)",
        report.country,
        report.generated_at.format("%Y-%m-%d %H:%M UTC"),
        report.company_summary.len(),
        report.article_sentiment.len()
    );
    println!("{:<32} {:<8} {:>10} {:>10} {:>10}", "Company", "Ticker", "Title", "Summary", "Overall");

    for row in &report.company_summary {
        println!(
            "{:<32} {:<8} {:>10} {:>10} {:>10}",
            row.name,
            row.ticker,
            format_polarity(row.title_avg_polarity),
            format_polarity(row.summary_avg_polarity),
            format_polarity(row.overall_avg_polarity)
        );
    }

    Ok(())
}

fn format_polarity(polarity: Option<f64>) -> String {
    match polarity {
        Some(value) => format!("{:+.4}", value),
        None => "n/a".to_string(),
    }
}
