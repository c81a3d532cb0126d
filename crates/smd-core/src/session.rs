//! Page session state: the last lookup outcome plus the watermark field.
//!
//! One `Session` stands in for the demo page. It is a single cooperative
//! actor: `submit` borrows the session exclusively until the lookup resolves,
//! so a second submit cannot start while one is pending. The watermark
//! history lives only as long as the session.

use crate::config::SmdConfig;
use crate::history::EditHistory;
use crate::lookup::{LookupClient, LookupError};
use crate::media::{DownloadOption, MediaInfo};

/// Acknowledgement shown after feedback is recorded.
pub const FEEDBACK_ACK: &str = "Thank you for your feedback!";

#[derive(Debug)]
pub struct Session {
    media: Option<MediaInfo>,
    error: Option<String>,
    watermark: EditHistory,
}

impl Session {
    pub fn new(config: &SmdConfig) -> Self {
        Session {
            media: None,
            error: None,
            watermark: EditHistory::with_limit(&config.default_watermark, config.history_limit),
        }
    }

    /// Submits a link: the previous outcome is cleared, then either the
    /// fabricated metadata or the error message is stored for rendering.
    pub async fn submit(
        &mut self,
        client: &LookupClient,
        link: &str,
    ) -> Result<&MediaInfo, LookupError> {
        self.media = None;
        self.error = None;
        match client.lookup(link).await {
            Ok(info) => Ok(self.media.insert(info)),
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn media(&self) -> Option<&MediaInfo> {
        self.media.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current watermark text.
    pub fn watermark(&self) -> &str {
        self.watermark.current()
    }

    /// Records a watermark edit (no-op when equal to the current text).
    pub fn set_watermark(&mut self, text: &str) {
        self.watermark.set(text);
    }

    pub fn undo_watermark(&mut self) -> bool {
        self.watermark.undo()
    }

    pub fn redo_watermark(&mut self) -> bool {
        self.watermark.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.watermark.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.watermark.can_redo()
    }

    /// Whether the watermark is applied to downloads: trimmed text non-empty.
    pub fn has_watermark(&self) -> bool {
        !self.watermark.current().trim().is_empty()
    }

    /// Mock download table for the fetched media, if any.
    pub fn download_options(&self) -> Option<&'static [DownloadOption]> {
        self.media.as_ref().map(|m| m.kind.download_options())
    }

    /// Message shown when a download option is picked.
    pub fn download_message(&self) -> String {
        if self.has_watermark() {
            format!(
                "Preparing your download with the '{}' watermark!",
                self.watermark.current()
            )
        } else {
            "Preparing your download!".to_string()
        }
    }

    /// Records feedback. The ack text ([`FEEDBACK_ACK`]) is the caller's to
    /// show.
    pub fn submit_feedback(&self, text: &str) {
        tracing::info!("feedback submitted: {}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn session() -> Session {
        Session::new(&SmdConfig::default())
    }

    fn instant_client() -> LookupClient {
        LookupClient::new(Duration::ZERO)
    }

    #[test]
    fn fresh_session_has_no_outcome_and_seeded_watermark() {
        let s = session();
        assert!(s.media().is_none());
        assert!(s.error().is_none());
        assert_eq!(s.watermark(), "chaitanyalinked");
        assert!(!s.can_undo());
        assert!(!s.can_redo());
        assert!(s.download_options().is_none());
    }

    #[tokio::test]
    async fn submit_stores_media_on_success() {
        let mut s = session();
        let client = instant_client();
        s.submit(&client, "https://youtu.be/dQw4w9WgXcQ").await.unwrap();
        assert!(s.error().is_none());
        assert_eq!(s.media().unwrap().id, "dQw4w9WgXcQ");
        assert_eq!(s.download_options().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn failed_submit_replaces_previous_media_with_error() {
        let mut s = session();
        let client = instant_client();
        s.submit(&client, "https://youtu.be/dQw4w9WgXcQ").await.unwrap();
        let _ = s.submit(&client, "https://example.com/x").await.unwrap_err();
        assert!(s.media().is_none());
        assert_eq!(s.error(), Some("Unsupported or invalid social media link."));
        assert!(s.download_options().is_none());
    }

    #[test]
    fn watermark_edits_flow_through_history() {
        let mut s = session();
        s.set_watermark("abc");
        assert!(s.can_undo());
        assert!(s.undo_watermark());
        assert_eq!(s.watermark(), "chaitanyalinked");
        assert!(s.redo_watermark());
        assert_eq!(s.watermark(), "abc");
        assert!(!s.redo_watermark());
    }

    #[test]
    fn whitespace_watermark_counts_as_absent() {
        let mut s = session();
        s.set_watermark("   ");
        assert!(!s.has_watermark());
        assert_eq!(s.download_message(), "Preparing your download!");
    }

    #[test]
    fn download_message_quotes_the_watermark() {
        let s = session();
        assert_eq!(
            s.download_message(),
            "Preparing your download with the 'chaitanyalinked' watermark!"
        );
    }
}
