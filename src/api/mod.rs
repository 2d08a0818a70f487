//! External-service clients.
//!
//! Both externals sit behind a trait so the pipeline can be driven by test
//! doubles; the production implementations live in the submodules.

pub mod openai;
pub mod yahoo;

use async_trait::async_trait;

use crate::api::openai::ApiError;
use crate::api::yahoo::MarketError;
use crate::models::Candle;

/// Historical price data source.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily candles from January 1 of the current year through today,
    /// ordered ascending by date. An unknown symbol may surface either as
    /// an error or as an empty series, depending on the provider.
    async fn history_year_to_date(&self, symbol: &str) -> Result<Vec<Candle>, MarketError>;

    /// Human-readable company name for a symbol, if the provider knows one.
    async fn display_name(&self, symbol: &str) -> Result<Option<String>, MarketError>;
}

/// Text-completion service used for the narrative analysis.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Submit a single user prompt and return the completion text.
    async fn complete(&self, prompt: &str) -> Result<String, ApiError>;
}
