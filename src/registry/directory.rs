use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{MarketMoodError, Result};

/// One listed company as resolved from the registry. Identified by ticker
/// within a country; registry columns beyond name/symbol/country are carried
/// along untouched for the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub ticker: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub registry_fields: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ScreenerResponse {
    data: Option<ScreenerData>,
}

#[derive(Debug, Deserialize)]
struct ScreenerData {
    rows: Option<Vec<ScreenerRow>>,
}

#[derive(Debug, Deserialize)]
struct ScreenerRow {
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

pub struct TickerDirectory {
    client: Client,
    registry_url: String,
    roster_limit: u32,
}

impl TickerDirectory {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: config.http_client()?,
            registry_url: config.registry_url.clone(),
            roster_limit: config.roster_limit,
        })
    }

    /// Resolve the company roster for a country. The country string is passed
    /// to the registry verbatim; its matching is case-sensitive. A valid
    /// country with no listed companies yields an empty roster, not an error.
    pub async fn fetch_roster(&self, country: &str) -> Result<Vec<Company>> {
        info!("Fetching {} companies data...", country);

        let limit = self.roster_limit.to_string();
        let response = self
            .client
            .get(&self.registry_url)
            .query(&[
                ("tableonly", "true"),
                ("limit", limit.as_str()),
                ("offset", "0"),
                ("download", "true"),
                ("country", country),
            ])
            .send()
            .await
            .map_err(|e| {
                MarketMoodError::registry_error(format!(
                    "screener request for {} failed: {}",
                    country, e
                ))
            })?;

        if !response.status().is_success() {
            return Err(MarketMoodError::registry_error(format!(
                "screener returned status {} for {}",
                response.status(),
                country
            )));
        }

        let payload: ScreenerResponse = response.json().await.map_err(|e| {
            MarketMoodError::registry_error(format!(
                "malformed screener payload for {}: {}",
                country, e
            ))
        })?;

        let roster = roster_from_payload(payload, country)?;
        info!("{} companies data downloaded ({} companies)", country, roster.len());
        Ok(roster)
    }
}

/// Turn a screener payload into an ordered roster, unique by ticker. A row
/// with a blank symbol or name means the payload is malformed.
fn roster_from_payload(payload: ScreenerResponse, country: &str) -> Result<Vec<Company>> {
    let data = payload.data.ok_or_else(|| {
        MarketMoodError::registry_error(format!(
            "screener response for {} is missing its data section",
            country
        ))
    })?;

    let rows = data.rows.unwrap_or_default();
    let mut seen = HashSet::new();
    let mut roster = Vec::with_capacity(rows.len());

    for row in rows {
        if row.symbol.trim().is_empty() || row.name.trim().is_empty() {
            return Err(MarketMoodError::registry_error(format!(
                "screener row for {} has a blank symbol or name",
                country
            )));
        }

        if !seen.insert(row.symbol.clone()) {
            debug!("Skipping duplicate ticker {}", row.symbol);
            continue;
        }

        roster.push(Company {
            name: row.name,
            ticker: row.symbol,
            country: row.country.unwrap_or_else(|| country.to_string()),
            registry_fields: row.extra,
        });
    }

    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ScreenerResponse {
        serde_json::from_str(json).expect("payload should deserialize")
    }

    #[test]
    fn resolves_ireland_roster_in_registry_order() {
        let payload = parse(
            r#"{
                "data": {
                    "headers": {"symbol": "Symbol", "name": "Name"},
                    "rows": [
                        {"symbol": "CRH", "name": "CRH PLC", "country": "Ireland", "lastsale": "$92.10"},
                        {"symbol": "KRYAY", "name": "Kerry Group", "country": "Ireland"}
                    ]
                }
            }"#,
        );

        let roster = roster_from_payload(payload, "Ireland").unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].ticker, "CRH");
        assert_eq!(roster[0].name, "CRH PLC");
        assert_eq!(roster[0].registry_fields["lastsale"], "$92.10");
        assert_eq!(roster[1].ticker, "KRYAY");
        assert_eq!(roster[1].country, "Ireland");
    }

    #[test]
    fn duplicate_tickers_keep_first_occurrence() {
        let payload = parse(
            r#"{
                "data": {
                    "rows": [
                        {"symbol": "CRH", "name": "CRH PLC"},
                        {"symbol": "CRH", "name": "CRH PLC (dup)"},
                        {"symbol": "KRYAY", "name": "Kerry Group"}
                    ]
                }
            }"#,
        );

        let roster = roster_from_payload(payload, "Ireland").unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "CRH PLC");
        assert_eq!(roster[1].ticker, "KRYAY");
    }

    #[test]
    fn empty_country_yields_empty_roster() {
        let payload = parse(r#"{"data": {"rows": null}}"#);
        let roster = roster_from_payload(payload, "Andorra").unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn missing_data_section_is_a_registry_error() {
        let payload = parse(r#"{"data": null}"#);
        let err = roster_from_payload(payload, "Ireland").unwrap_err();
        assert!(matches!(err, MarketMoodError::Registry(_)));
    }

    #[test]
    fn blank_symbol_is_a_registry_error() {
        let payload = parse(
            r#"{"data": {"rows": [{"symbol": "  ", "name": "Ghost Corp"}]}}"#,
        );
        let err = roster_from_payload(payload, "Ireland").unwrap_err();
        assert!(matches!(err, MarketMoodError::Registry(_)));
    }

    #[test]
    fn missing_country_field_falls_back_to_requested_country() {
        let payload = parse(r#"{"data": {"rows": [{"symbol": "CRH", "name": "CRH PLC"}]}}"#);
        let roster = roster_from_payload(payload, "Ireland").unwrap();
        assert_eq!(roster[0].country, "Ireland");
    }
}
