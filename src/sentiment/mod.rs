pub mod preprocess;
pub mod scorer;

pub use preprocess::TextPreprocessor;
pub use scorer::{SentimentLabel, SentimentScore, SentimentScorer};

use crate::news::NewsItem;

/// A news item with its title and summary scored. Scores are attached once
/// and read-only from here on.
#[derive(Debug, Clone)]
pub struct ScoredNewsItem {
    pub item: NewsItem,
    pub title_score: SentimentScore,
    pub summary_score: SentimentScore,
}
