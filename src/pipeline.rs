use std::sync::Arc;

use chrono::Datelike;
use tracing::{info, warn};

use crate::api::{CompletionProvider, MarketDataProvider};
use crate::config::BotConfig;
use crate::models::{DaySummary, StockReport};
use crate::services::{analysis_service, chart_service};
use crate::utils::CommandError;

/// The command pipeline: one `run` performs the fixed sequence
/// fetch → summarize → render → analyze and returns everything the reply
/// needs. Providers are injected so tests can substitute doubles.
pub struct Pipeline {
    market_suffix: String,
    market: Arc<dyn MarketDataProvider>,
    analyst: Arc<dyn CompletionProvider>,
}

impl Pipeline {
    pub fn new(
        config: &BotConfig,
        market: Arc<dyn MarketDataProvider>,
        analyst: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            market_suffix: config.market_suffix.clone(),
            market,
            analyst,
        }
    }

    /// Exchange-qualified identifier the market-data provider understands.
    fn qualify(&self, ticker: &str) -> String {
        format!("{}{}", ticker, self.market_suffix)
    }

    /// Run the whole pipeline for one ticker. Steps are strictly
    /// sequential; the first failing step aborts the command.
    pub async fn run(&self, ticker: &str) -> Result<StockReport, CommandError> {
        let ticker = ticker.to_uppercase();
        let symbol = self.qualify(&ticker);

        info!("Fetching year-to-date history for {}", symbol);
        let candles = self.market.history_year_to_date(&symbol).await?;
        if candles.is_empty() {
            return Err(CommandError::NoData(symbol));
        }
        info!("✓ {} sessions for {}", candles.len(), symbol);

        let name = match self.market.display_name(&symbol).await {
            Ok(Some(name)) => name,
            Ok(None) => ticker.clone(),
            Err(e) => {
                warn!("Name lookup failed for {}: {}", symbol, e);
                ticker.clone()
            }
        };

        let Some(summary) = DaySummary::from_series(&candles) else {
            return Err(CommandError::NoData(symbol));
        };

        let chart_png = chart_service::render_close_chart(&candles, &name, &ticker)?;
        info!("✓ Chart rendered: {} bytes", chart_png.len());

        let year = summary.latest.date.year();
        let analysis =
            analysis_service::request_analysis(self.analyst.as_ref(), &name, &ticker, year).await?;
        info!("✓ Analysis received: {} chars", analysis.len());

        Ok(StockReport {
            ticker,
            name,
            summary,
            analysis,
            chart_png,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::openai::ApiError;
    use crate::api::yahoo::MarketError;
    use crate::models::Candle;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FakeMarket {
        candles: Vec<Candle>,
        name: Option<String>,
        requested: Mutex<Vec<String>>,
    }

    impl FakeMarket {
        fn with_candles(candles: Vec<Candle>) -> Self {
            Self {
                candles,
                name: Some("Acme Corp".to_string()),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MarketDataProvider for FakeMarket {
        async fn history_year_to_date(&self, symbol: &str) -> Result<Vec<Candle>, MarketError> {
            self.requested.lock().unwrap().push(symbol.to_string());
            Ok(self.candles.clone())
        }

        async fn display_name(&self, _symbol: &str) -> Result<Option<String>, MarketError> {
            Ok(self.name.clone())
        }
    }

    struct FakeAnalyst {
        calls: AtomicUsize,
    }

    impl FakeAnalyst {
        fn new() -> Self {
            Self { calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl CompletionProvider for FakeAnalyst {
        async fn complete(&self, _prompt: &str) -> Result<String, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("Steady uptrend.".to_string())
        }
    }

    fn test_config() -> BotConfig {
        BotConfig {
            discord_token: "token".to_string(),
            openai_api_key: "key".to_string(),
            openai_model: "gpt-3.5-turbo".to_string(),
            trigger: "!stock".to_string(),
            market_suffix: ".TW".to_string(),
        }
    }

    fn candle(day: u32, close: f64) -> Candle {
        Candle {
            date: NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
        }
    }

    #[tokio::test]
    async fn test_empty_series_is_no_data_and_skips_analysis() {
        let market = Arc::new(FakeMarket::with_candles(Vec::new()));
        let analyst = Arc::new(FakeAnalyst::new());
        let pipeline = Pipeline::new(&test_config(), market.clone(), analyst.clone());

        let err = pipeline.run("2330").await.unwrap_err();

        assert!(matches!(err, CommandError::NoData(ref s) if s == "2330.TW"));
        assert_eq!(analyst.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_symbol_is_uppercased_and_market_qualified() {
        let market = Arc::new(FakeMarket::with_candles(Vec::new()));
        let analyst = Arc::new(FakeAnalyst::new());
        let pipeline = Pipeline::new(&test_config(), market.clone(), analyst);

        let _ = pipeline.run("abc").await;

        let requested = market.requested.lock().unwrap();
        assert_eq!(requested.len(), 1);
        assert_eq!(requested[0], "ABC.TW");
    }

    #[tokio::test]
    #[ignore] // Requires a system font for chart rendering
    async fn test_full_run_builds_a_report() {
        let market = Arc::new(FakeMarket::with_candles(vec![
            candle(3, 100.00),
            candle(4, 105.25),
        ]));
        let analyst = Arc::new(FakeAnalyst::new());
        let pipeline = Pipeline::new(&test_config(), market, analyst.clone());

        let report = pipeline.run("2330").await.unwrap();

        assert_eq!(report.ticker, "2330");
        assert_eq!(report.name, "Acme Corp");
        assert_eq!(report.analysis, "Steady uptrend.");
        assert!(!report.chart_png.is_empty());
        let change = report.summary.change.unwrap();
        assert!((change.absolute - 5.25).abs() < 1e-9);
        assert!((change.percent - 5.25).abs() < 1e-9);
        assert_eq!(analyst.calls.load(Ordering::SeqCst), 1);
    }
}
