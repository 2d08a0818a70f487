use tracing::debug;

use crate::api::openai::ApiError;
use crate::api::CompletionProvider;

/// Build the analysis prompt for one symbol's year-to-date series.
pub fn build_prompt(name: &str, ticker: &str, year: i32) -> String {
    format!(
        "Analyze the {year} year-to-date share price of {name} ({ticker}). \
         Describe the overall trend, the key support and resistance levels, \
         and finish with an investment recommendation."
    )
}

/// Ask the completion provider for a narrative read of the series.
pub async fn request_analysis(
    analyst: &dyn CompletionProvider,
    name: &str,
    ticker: &str,
    year: i32,
) -> Result<String, ApiError> {
    let prompt = build_prompt(name, ticker, year);
    debug!("Submitting analysis prompt for {} ({})", name, ticker);
    analyst.complete(&prompt).await
}
