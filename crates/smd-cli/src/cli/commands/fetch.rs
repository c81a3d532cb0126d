//! `smd fetch <url>` – one-shot page flow: detect, simulated wait, card.

use std::time::Duration;

use anyhow::Result;
use smd_core::config::SmdConfig;
use smd_core::lookup::LookupClient;
use smd_core::session::Session;

pub async fn run_fetch(
    cfg: &SmdConfig,
    url: &str,
    json: bool,
    watermark: Option<&str>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let client = match delay_ms {
        Some(ms) => LookupClient::new(Duration::from_millis(ms)),
        None => LookupClient::from_config(cfg),
    };

    let mut session = Session::new(cfg);
    if let Some(text) = watermark {
        session.set_watermark(text);
    }

    session.submit(&client, url).await?;

    if json {
        print_json(&session)?;
    } else {
        print_card(&session);
    }
    Ok(())
}

/// Renders the result card the way the page does: source, title, thumbnail,
/// watermark line, numbered download options. Prints nothing without media.
pub(super) fn print_card(session: &Session) {
    let info = match session.media() {
        Some(info) => info,
        None => return,
    };
    println!("Source:    {}", info.platform);
    println!("Title:     {}", info.title);
    println!("Type:      {}", info.kind.as_str());
    println!("Thumbnail: {}", info.thumbnail);
    println!("Watermark: {}", session.watermark());
    println!();
    println!("Download options:");
    for (i, opt) in info.kind.download_options().iter().enumerate() {
        println!("{:>4}) {:<8} {}", i + 1, opt.format, opt.container);
    }
}

fn print_json(session: &Session) -> Result<()> {
    let payload = serde_json::json!({
        "media": session.media(),
        "options": session.download_options(),
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
