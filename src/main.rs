use std::sync::Arc;

use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod pipeline;
mod services;
mod utils;

use api::openai::OpenAiClient;
use api::yahoo::YahooMarketClient;
use config::BotConfig;
use pipeline::Pipeline;

struct Handler;

struct BotConfigKey;

impl TypeMapKey for BotConfigKey {
    type Value = Arc<BotConfig>;
}

struct PipelineKey;

impl TypeMapKey for PipelineKey {
    type Value = Arc<Pipeline>;
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&ctx, &msg).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("stock_superman=debug".parse().unwrap())
            .add_directive("serenity=warn".parse().unwrap()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("📈 Starting stock-superman bot...");

    let config = match BotConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            return;
        }
    };
    info!("Trigger word: {}  Market suffix: {}", config.trigger, config.market_suffix);

    let market = Arc::new(YahooMarketClient::new());
    let analyst = Arc::new(OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
    ));
    let pipeline = Arc::new(Pipeline::new(&config, market, analyst));

    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler)
        .await
        .expect("Failed to create client");

    // Store the configuration and pipeline in client data
    {
        let mut data = client.data.write().await;
        data.insert::<BotConfigKey>(Arc::new(config));
        data.insert::<PipelineKey>(pipeline);
    }

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }
}
