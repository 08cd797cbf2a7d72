use webhook::{Embed, Webhook};

const ANNOUNCEMENT_EMBED_COLOR: u32 = 0xFFD700; // gold

pub fn announcement_webhook(webhook_url: &str, text: &str) -> Webhook {
    let embed = Embed::new()
        .title("\u{1F4E2} NEW ANNOUNCEMENT")
        .description(text)
        .color(ANNOUNCEMENT_EMBED_COLOR)
        .timestamp(chrono::Utc::now().to_rfc3339());

    Webhook::new(webhook_url)
        .content("@everyone")
        .add_embed(embed)
}

/// Best-effort broadcast. The announcement is already published by the time
/// this runs, so whatever Discord does must not reach the caller.
pub async fn notify_discord(webhook_url: Option<&str>, text: &str) {
    let Some(url) = webhook_url else {
        return;
    };

    if let Err(e) = announcement_webhook(url, text).post().await {
        tracing::warn!("announcement webhook failed: {e}");
    }
}
