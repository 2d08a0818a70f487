use thiserror::Error;

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TRIGGER: &str = "!stock";
const DEFAULT_MARKET_SUFFIX: &str = ".TW";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),
}

/// Process configuration, loaded once at startup and handed to the
/// pipeline constructor.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord_token: String,
    pub openai_api_key: String,
    pub openai_model: String,
    /// Leading command word, e.g. `!stock` in `!stock 2330`.
    pub trigger: String,
    /// Exchange qualifier appended to every ticker before it is sent to
    /// the market-data provider.
    pub market_suffix: String,
}

impl BotConfig {
    /// Load configuration from the environment (a `.env` file is read by
    /// the caller before this runs). Both secrets are required; the rest
    /// fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let discord_token = std::env::var("DISCORD_TOKEN")
            .map_err(|_| ConfigError::MissingVar("DISCORD_TOKEN"))?;
        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingVar("OPENAI_API_KEY"))?;

        let openai_model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let trigger =
            std::env::var("STOCK_TRIGGER").unwrap_or_else(|_| DEFAULT_TRIGGER.to_string());
        let market_suffix =
            std::env::var("MARKET_SUFFIX").unwrap_or_else(|_| DEFAULT_MARKET_SUFFIX.to_string());

        Ok(Self {
            discord_token,
            openai_api_key,
            openai_model,
            trigger,
            market_suffix,
        })
    }
}
