use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry::Company;
use crate::sentiment::ScoredNewsItem;

/// Per-company summary statistics. All three averages are `None` for a
/// company with no news items: an empty set has no mean, and "no news" must
/// not read as "perfectly neutral sentiment".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAggregate {
    pub ticker: String,
    pub title_avg_polarity: Option<f64>,
    pub summary_avg_polarity: Option<f64>,
    pub overall_avg_polarity: Option<f64>,
}

pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(&self, company: &Company, articles: &[ScoredNewsItem]) -> CompanyAggregate {
        if articles.is_empty() {
            debug!("No news for {}, aggregates stay undefined", company.name);
            return CompanyAggregate {
                ticker: company.ticker.clone(),
                title_avg_polarity: None,
                summary_avg_polarity: None,
                overall_avg_polarity: None,
            };
        }

        let count = articles.len() as f64;
        let title_avg = articles
            .iter()
            .map(|article| article.title_score.polarity)
            .sum::<f64>()
            / count;
        let summary_avg = articles
            .iter()
            .map(|article| article.summary_score.polarity)
            .sum::<f64>()
            / count;

        CompanyAggregate {
            ticker: company.ticker.clone(),
            title_avg_polarity: Some(title_avg),
            summary_avg_polarity: Some(summary_avg),
            overall_avg_polarity: Some((title_avg + summary_avg) / 2.0),
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}
