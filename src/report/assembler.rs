use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::CompanyAnalysis;
use crate::sentiment::SentimentLabel;

/// One row of the company-summary table: the company's registry identity,
/// its aggregates, and whatever extra columns the registry served.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    pub name: String,
    pub ticker: String,
    pub country: String,
    pub title_avg_polarity: Option<f64>,
    pub summary_avg_polarity: Option<f64>,
    pub overall_avg_polarity: Option<f64>,
    #[serde(flatten)]
    pub registry_fields: serde_json::Map<String, serde_json::Value>,
}

/// One row of the article-sentiment table, tagged with its owning company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRow {
    pub company: String,
    pub ticker: String,
    pub title: String,
    pub summary: String,
    pub title_polarity: f64,
    pub title_sentiment: SentimentLabel,
    pub summary_polarity: f64,
    pub summary_sentiment: SentimentLabel,
}

/// The exportable result of a run: two tables joined by company name/ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub country: String,
    pub generated_at: DateTime<Utc>,
    pub company_summary: Vec<SummaryRow>,
    pub article_sentiment: Vec<ArticleRow>,
}

pub struct ReportAssembler;

impl ReportAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Merge the per-company analyses into the two-table report. Every
    /// company gets exactly one summary row (zero-news companies keep their
    /// undefined aggregates); every article gets exactly one row, in roster
    /// order then feed order.
    pub fn assemble(&self, country: &str, analyses: &[CompanyAnalysis]) -> Report {
        let company_summary = analyses
            .iter()
            .map(|analysis| SummaryRow {
                name: analysis.company.name.clone(),
                ticker: analysis.company.ticker.clone(),
                country: analysis.company.country.clone(),
                title_avg_polarity: analysis.aggregate.title_avg_polarity,
                summary_avg_polarity: analysis.aggregate.summary_avg_polarity,
                overall_avg_polarity: analysis.aggregate.overall_avg_polarity,
                registry_fields: analysis.company.registry_fields.clone(),
            })
            .collect();

        let article_sentiment = analyses
            .iter()
            .flat_map(|analysis| {
                analysis.articles.iter().map(|article| ArticleRow {
                    company: analysis.company.name.clone(),
                    ticker: analysis.company.ticker.clone(),
                    title: article.item.title.clone(),
                    summary: article.item.summary.clone(),
                    title_polarity: article.title_score.polarity,
                    title_sentiment: article.title_score.label,
                    summary_polarity: article.summary_score.polarity,
                    summary_sentiment: article.summary_score.label,
                })
            })
            .collect();

        Report {
            country: country.to_string(),
            generated_at: Utc::now(),
            company_summary,
            article_sentiment,
        }
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new()
    }
}
