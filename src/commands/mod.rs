pub mod stock;

use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::error;

use crate::utils::CommandError;

pub async fn handle_message(ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    let config = {
        let data = ctx.data.read().await;
        match data.get::<crate::BotConfigKey>() {
            Some(c) => c.clone(),
            None => return,
        }
    };

    let Some(args) = parse_trigger(&msg.content, &config.trigger) else {
        return;
    };

    if let Err(e) = stock::execute(ctx, msg, &args).await {
        error!("❌ Stock command failed: {}", e);

        // Each failure class gets its own diagnostic; none of them may
        // take the process down.
        let (title, description, color) = match &e {
            CommandError::NoData(_) => ("No Data", format!("❌ {}", e), 0xffa500),
            CommandError::MalformedCommand => (
                "Usage",
                format!("❌ Missing ticker symbol. Try `{} 2330`.", config.trigger),
                0xffa500,
            ),
            _ => ("Command Error", format!("⚠️ {}", e), 0xff0000),
        };

        let embed = serenity::builder::CreateEmbed::default()
            .title(title)
            .description(description)
            .color(color);

        let _ = msg
            .channel_id
            .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
            .await;
    }
}

/// Arguments following the trigger word, or `None` when the message is not
/// a command. The trigger must match the first token exactly: `!stock 2330`
/// fires, `!stocks 2330` does not.
fn parse_trigger<'a>(content: &'a str, trigger: &str) -> Option<Vec<&'a str>> {
    let mut parts = content.split_whitespace();
    if parts.next()? != trigger {
        return None;
    }
    Some(parts.collect())
}
