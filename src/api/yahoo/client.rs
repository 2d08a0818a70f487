use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use thiserror::Error;
use time::OffsetDateTime;
use yahoo_finance_api as yahoo;

use crate::api::MarketDataProvider;
use crate::models::Candle;

/// Market-data provider errors
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("yahoo finance error: {0}")]
    Yahoo(String),
    #[error("invalid date range")]
    InvalidRange,
}

/// Yahoo Finance market-data client
pub struct YahooMarketClient;

impl YahooMarketClient {
    pub fn new() -> Self {
        Self
    }

    fn to_offset(ts: DateTime<Utc>) -> Result<OffsetDateTime, MarketError> {
        OffsetDateTime::from_unix_timestamp(ts.timestamp()).map_err(|_| MarketError::InvalidRange)
    }
}

impl Default for YahooMarketClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketClient {
    async fn history_year_to_date(&self, symbol: &str) -> Result<Vec<Candle>, MarketError> {
        let end = Utc::now();
        let start = chrono::NaiveDate::from_ymd_opt(end.year(), 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|d| d.and_utc())
            .ok_or(MarketError::InvalidRange)?;

        let provider = yahoo::YahooConnector::new()
            .map_err(|e| MarketError::Yahoo(e.to_string()))?;

        let response = provider
            .get_quote_history(symbol, Self::to_offset(start)?, Self::to_offset(end)?)
            .await
            .map_err(|e| MarketError::Yahoo(e.to_string()))?;

        let quotes = response
            .quotes()
            .map_err(|e| MarketError::Yahoo(e.to_string()))?;

        let mut candles: Vec<Candle> = quotes
            .iter()
            .map(|q| Candle {
                date: DateTime::from_timestamp(q.timestamp as i64, 0)
                    .unwrap_or_else(Utc::now)
                    .date_naive(),
                open: q.open,
                high: q.high,
                low: q.low,
                close: q.close,
            })
            .collect();

        // Should already be sorted from the provider, but ensure it
        candles.sort_by_key(|c| c.date);

        Ok(candles)
    }

    async fn display_name(&self, symbol: &str) -> Result<Option<String>, MarketError> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| MarketError::Yahoo(e.to_string()))?;

        let result = provider
            .search_ticker(symbol)
            .await
            .map_err(|e| MarketError::Yahoo(e.to_string()))?;

        // Prefer the exact symbol match, otherwise take the top hit
        let item = result
            .quotes
            .iter()
            .find(|q| q.symbol == symbol)
            .or_else(|| result.quotes.first());

        Ok(item.and_then(|q| {
            if !q.long_name.is_empty() {
                Some(q.long_name.clone())
            } else if !q.short_name.is_empty() {
                Some(q.short_name.clone())
            } else {
                None
            }
        }))
    }
}
