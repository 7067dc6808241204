use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::error::{MarketMoodError, Result};
use crate::news::NewsItem;
use crate::sentiment::ScoredNewsItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Label follows the sign of the polarity: strictly positive is Positive,
    /// strictly negative is Negative, exactly zero is Neutral. A zero score
    /// from text with no sentiment-bearing words is reported as Neutral too;
    /// the two cases are intentionally not distinguished.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Self::Positive
        } else if polarity < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Polarity in [-1.0, 1.0] plus its categorical label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentScore {
    pub polarity: f64,
    pub label: SentimentLabel,
}

impl SentimentScore {
    pub fn from_polarity(polarity: f64) -> Self {
        Self {
            polarity,
            label: SentimentLabel::from_polarity(polarity),
        }
    }

    pub fn neutral() -> Self {
        Self::from_polarity(0.0)
    }
}

/// Lexicon-backed scorer. Pure: identical text always yields the identical
/// score. The lexicon bounds the compound score to [-1.0, 1.0] on its own;
/// no extra clamping is applied.
pub struct SentimentScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    pub fn score(&self, text: &str) -> SentimentScore {
        // The lexicon's behavior on empty input is not part of its contract,
        // so empty text is pinned to neutral here.
        if text.trim().is_empty() {
            return SentimentScore::neutral();
        }

        let scores = self.analyzer.polarity_scores(text);
        let polarity = scores.get("compound").copied().unwrap_or(0.0);
        SentimentScore::from_polarity(polarity)
    }

    /// Score a news item's title and summary independently. Scoring is total
    /// over strings; the non-finite check only guards against lexicon bugs.
    pub fn score_item(&self, item: &NewsItem) -> Result<ScoredNewsItem> {
        let title_score = self.score(&item.title);
        let summary_score = self.score(&item.summary);

        if !title_score.polarity.is_finite() || !summary_score.polarity.is_finite() {
            return Err(MarketMoodError::scoring_error(format!(
                "non-finite polarity for article '{}' ({})",
                item.title, item.ticker
            )));
        }

        Ok(ScoredNewsItem {
            item: item.clone(),
            title_score,
            summary_score,
        })
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_polarity_sign() {
        assert_eq!(SentimentLabel::from_polarity(0.7), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(f64::MIN_POSITIVE), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(-0.7), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(-f64::MIN_POSITIVE), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn scored_samples_honor_the_label_invariant() {
        let scorer = SentimentScorer::new();
        let samples = [
            "Great results, investors are happy with the amazing profits",
            "Terrible losses and an awful outlook worry investors",
            "The company scheduled its annual meeting for Tuesday",
            "",
        ];

        for text in samples {
            let score = scorer.score(text);
            assert_eq!(score.label, SentimentLabel::from_polarity(score.polarity));
        }
    }

    #[test]
    fn positive_and_negative_texts_score_with_the_right_sign() {
        let scorer = SentimentScorer::new();

        let positive = scorer.score("Great news, profits are amazing and investors are happy");
        assert!(positive.polarity > 0.0, "got {}", positive.polarity);
        assert_eq!(positive.label, SentimentLabel::Positive);

        let negative = scorer.score("Terrible quarter, the worst losses in years, investors are angry");
        assert!(negative.polarity < 0.0, "got {}", negative.polarity);
        assert_eq!(negative.label, SentimentLabel::Negative);
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = SentimentScorer::new();
        let text = "Shares rallied after an excellent earnings report";
        let first = scorer.score(text);
        let second = scorer.score(text);
        assert_eq!(first.polarity, second.polarity);
        assert_eq!(first.label, second.label);
    }

    #[test]
    fn empty_text_is_neutral() {
        let scorer = SentimentScorer::new();
        for text in ["", "   ", "\n\t"] {
            let score = scorer.score(text);
            assert_eq!(score.polarity, 0.0);
            assert_eq!(score.label, SentimentLabel::Neutral);
        }
    }

    #[test]
    fn score_item_scores_title_and_summary_independently() {
        let scorer = SentimentScorer::new();
        let item = NewsItem {
            ticker: "CRH".to_string(),
            title: "Wonderful record profits delight investors".to_string(),
            summary: "Terrible cost overruns hurt the outlook".to_string(),
        };

        let scored = scorer.score_item(&item).unwrap();
        assert_eq!(scored.title_score.label, SentimentLabel::Positive);
        assert_eq!(scored.summary_score.label, SentimentLabel::Negative);
        assert_eq!(scored.item.ticker, "CRH");
    }
}
