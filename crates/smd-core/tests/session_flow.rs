//! Integration test: the full page flow against the public API.
//!
//! Drives a session the way the CLI does: submit a link, read back the
//! fabricated card data, then edit the watermark through undo/redo.

use std::time::Duration;

use smd_core::config::SmdConfig;
use smd_core::lookup::LookupClient;
use smd_core::media::MediaKind;
use smd_core::platform::Platform;
use smd_core::session::Session;

fn instant_client() -> LookupClient {
    LookupClient::new(Duration::ZERO)
}

#[tokio::test]
async fn youtube_submit_renders_a_video_card() {
    let mut session = Session::new(&SmdConfig::default());
    let info = session
        .submit(&instant_client(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await
        .expect("supported link");

    assert_eq!(info.platform, Platform::YouTube);
    assert_eq!(info.kind, MediaKind::Video);
    assert_eq!(info.title, "Your Awesome YouTube Video Title Goes Here");
    assert_eq!(info.thumbnail, "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg");

    let options = session.download_options().expect("video table");
    assert_eq!(options.iter().map(|o| o.format).collect::<Vec<_>>(), [
        "1080p", "720p", "480p", "Audio"
    ]);
}

#[tokio::test]
async fn unsupported_link_surfaces_the_page_error() {
    let mut session = Session::new(&SmdConfig::default());
    let err = session
        .submit(&instant_client(), "https://example.com/watch?v=dQw4w9WgXcQ")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Unsupported or invalid social media link.");
    assert_eq!(session.error(), Some("Unsupported or invalid social media link."));
    assert!(session.media().is_none());
}

#[tokio::test]
async fn watermark_edit_undo_edit_discards_the_redo_branch() {
    let mut session = Session::new(&SmdConfig::default());
    session
        .submit(&instant_client(), "https://instagram.com/p/C8xYz_ab123")
        .await
        .expect("supported link");

    assert_eq!(session.watermark(), "chaitanyalinked");
    session.set_watermark("abc");
    assert!(session.undo_watermark());
    assert_eq!(session.watermark(), "chaitanyalinked");
    session.set_watermark("xyz");

    assert_eq!(session.watermark(), "xyz");
    assert!(!session.can_redo(), "divergent edit must discard redo");
    assert!(session.can_undo());
    assert_eq!(
        session.download_message(),
        "Preparing your download with the 'xyz' watermark!"
    );

    assert!(session.undo_watermark());
    assert_eq!(session.watermark(), "chaitanyalinked");
    assert!(!session.undo_watermark(), "seed is the oldest entry");
}

#[tokio::test]
async fn configured_history_limit_caps_undo_depth() {
    let config = SmdConfig {
        lookup_delay_ms: 0,
        default_watermark: "seed".to_string(),
        history_limit: 3,
    };
    let mut session = Session::new(&config);
    for text in ["a", "b", "c", "d"] {
        session.set_watermark(text);
    }

    assert_eq!(session.watermark(), "d");
    assert!(session.undo_watermark());
    assert!(session.undo_watermark());
    assert!(!session.undo_watermark(), "older entries were evicted");
    assert_eq!(session.watermark(), "b");
}
