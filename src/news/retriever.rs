use reqwest::Client;
use rss::Channel;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::error::{MarketMoodError, Result};

/// A news article headline for one company, in the order the feed served it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub ticker: String,
    pub title: String,
    pub summary: String,
}

pub struct NewsRetriever {
    client: Client,
    feed_url: String,
}

impl NewsRetriever {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: config.http_client()?,
            feed_url: config.news_feed_url.clone(),
        })
    }

    /// Fetch the recent headline feed for a ticker. Feed order is kept as-is
    /// (the feed serves newest first) and duplicates are not filtered. A
    /// company with no recent news yields an empty list, not an error.
    pub async fn fetch_news(&self, ticker: &str) -> Result<Vec<NewsItem>> {
        info!("Fetching news for {}...", ticker);

        let response = self
            .client
            .get(&self.feed_url)
            .query(&[("s", ticker), ("region", "US"), ("lang", "en-US")])
            .send()
            .await
            .map_err(|e| {
                MarketMoodError::retrieval_error(format!(
                    "feed request for {} failed: {}",
                    ticker, e
                ))
            })?;

        if !response.status().is_success() {
            return Err(MarketMoodError::retrieval_error(format!(
                "feed returned status {} for {}",
                response.status(),
                ticker
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            MarketMoodError::retrieval_error(format!(
                "failed to read feed body for {}: {}",
                ticker, e
            ))
        })?;

        let items = items_from_feed(ticker, &body)?;
        info!("{} news gathered ({} items)", ticker, items.len());
        Ok(items)
    }
}

fn items_from_feed(ticker: &str, feed: &[u8]) -> Result<Vec<NewsItem>> {
    let channel = Channel::read_from(feed).map_err(|e| {
        MarketMoodError::retrieval_error(format!("malformed feed for {}: {}", ticker, e))
    })?;

    let items = channel
        .items()
        .iter()
        .map(|item| NewsItem {
            ticker: ticker.to_string(),
            title: item.title().unwrap_or_default().to_string(),
            summary: item.description().unwrap_or_default().to_string(),
        })
        .collect();

    Ok(items)
}
