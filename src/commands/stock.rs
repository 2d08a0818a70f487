use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::utils::CommandError;

/// Fetch, chart and analyze one ticker, then reply with the report text
/// followed by the chart attachment.
pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), CommandError> {
    let ticker = args.first().copied().ok_or(CommandError::MalformedCommand)?;
    tracing::info!("📈 Stock command called for {}", ticker);

    let pipeline = {
        let data = ctx.data.read().await;
        data.get::<crate::PipelineKey>()
            .cloned()
            .ok_or(CommandError::Internal("pipeline not initialized"))?
    };

    // Show typing indicator while the pipeline runs
    if let Err(e) = msg.channel_id.broadcast_typing(ctx.http.as_ref()).await {
        tracing::warn!("Failed to broadcast typing: {}", e);
    }

    let report = pipeline.run(ticker).await?;

    msg.channel_id
        .send_message(
            ctx,
            serenity::builder::CreateMessage::default().content(report.to_message_text()),
        )
        .await?;

    let filename = format!("{}_ytd.png", report.ticker);
    let attachment = serenity::all::CreateAttachment::bytes(report.chart_png, filename);
    msg.channel_id
        .send_message(
            ctx,
            serenity::builder::CreateMessage::default().add_file(attachment),
        )
        .await?;

    tracing::info!("✓ Report sent for {}", report.ticker);
    Ok(())
}
