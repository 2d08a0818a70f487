use thiserror::Error;

use crate::api::openai::ApiError;
use crate::api::yahoo::MarketError;
use crate::services::chart_service::RenderError;

/// Everything that can go wrong inside one command invocation.
///
/// Each variant carries its own diagnostic so the dispatcher can answer the
/// channel with a message specific to the failing step instead of a
/// stringified catch-all. None of these ever escape the dispatcher.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The provider answered, but with an empty series for this symbol.
    #[error("no data found for {0}")]
    NoData(String),

    #[error("missing ticker symbol")]
    MalformedCommand,

    #[error("market data error: {0}")]
    Market(#[from] MarketError),

    #[error("chart error: {0}")]
    Render(#[from] RenderError),

    #[error("analysis error: {0}")]
    Analysis(#[from] ApiError),

    #[error("discord error: {0}")]
    Discord(#[from] serenity::Error),

    #[error("internal error: {0}")]
    Internal(&'static str),
}
