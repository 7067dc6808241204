use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::{MarketMoodError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub registry_url: String,
    pub news_feed_url: String,
    pub output_dir: PathBuf,

    // Pipeline settings
    pub roster_limit: u32,
    pub fetch_concurrency: usize,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_url: "https://api.nasdaq.com/api/screener/stocks".to_string(),
            news_feed_url: "https://feeds.finance.yahoo.com/rss/2.0/headline".to_string(),
            output_dir: PathBuf::from("./reports"),
            roster_limit: 25,
            // 1 fetches one company's feed at a time
            fetch_concurrency: 1,
            request_timeout_secs: 15,
            // The screener endpoint rejects requests without a browser-like agent
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

pub async fn load_config() -> Result<Config> {
    let mut config = Config::default();

    // Override defaults with environment variables
    if let Ok(registry_url) = env::var("MARKETMOOD_REGISTRY_URL") {
        config.registry_url = registry_url;
    }

    if let Ok(news_feed_url) = env::var("MARKETMOOD_NEWS_FEED_URL") {
        config.news_feed_url = news_feed_url;
    }

    if let Ok(output_dir) = env::var("MARKETMOOD_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(output_dir);
    }

    if let Ok(roster_limit) = env::var("MARKETMOOD_ROSTER_LIMIT") {
        config.roster_limit = roster_limit.parse().map_err(|_| {
            MarketMoodError::config_error(format!(
                "MARKETMOOD_ROSTER_LIMIT is not a number: {}",
                roster_limit
            ))
        })?;
    }

    if let Ok(fetch_concurrency) = env::var("MARKETMOOD_FETCH_CONCURRENCY") {
        let parsed: usize = fetch_concurrency.parse().map_err(|_| {
            MarketMoodError::config_error(format!(
                "MARKETMOOD_FETCH_CONCURRENCY is not a number: {}",
                fetch_concurrency
            ))
        })?;
        config.fetch_concurrency = parsed.max(1);
    }

    if let Ok(timeout) = env::var("MARKETMOOD_TIMEOUT_SECS") {
        config.request_timeout_secs = timeout.parse().map_err(|_| {
            MarketMoodError::config_error(format!(
                "MARKETMOOD_TIMEOUT_SECS is not a number: {}",
                timeout
            ))
        })?;
    }

    if let Ok(user_agent) = env::var("MARKETMOOD_USER_AGENT") {
        config.user_agent = user_agent;
    }

    Ok(config)
}

impl Config {
    /// Build the HTTP client shared by the registry and news-feed calls.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(|e| MarketMoodError::config_error(format!("failed to build HTTP client: {}", e)))
    }
}

pub async fn initialize_config() -> Result<()> {
    info!("Checking configuration...");

    let config = load_config().await?;
    info!("Company registry endpoint: {}", config.registry_url);
    info!("News feed endpoint: {}", config.news_feed_url);
    info!("Reports directory: {}", config.output_dir.display());

    // Probe the registry so a bad endpoint shows up before a real run
    let client = config.http_client()?;
    let probe = client
        .get(&config.registry_url)
        .query(&[
            ("tableonly", "true"),
            ("limit", "1"),
            ("offset", "0"),
            ("download", "true"),
        ])
        .send()
        .await;

    match probe {
        Ok(response) => info!(
            "Company registry reachable (status {})",
            response.status()
        ),
        Err(e) => warn!("Could not reach company registry: {}", e),
    }

    info!("Configuration check completed");
    Ok(())
}
