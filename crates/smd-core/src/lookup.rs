//! Simulated metadata lookup.
//!
//! Detection is real; the rest of a lookup is a fixed sleep standing in for
//! the network round trip, followed by canned metadata. A recognized link
//! always resolves, and nothing is retried or cancelled.

use std::time::Duration;

use thiserror::Error;

use crate::config::SmdConfig;
use crate::media::{placeholder_info, MediaInfo};
use crate::platform;

/// Delay applied to every simulated lookup unless configured otherwise.
pub const DEFAULT_LOOKUP_DELAY_MS: u64 = 2000;

#[derive(Debug, Error)]
pub enum LookupError {
    /// The link matched no supported platform pattern.
    #[error("Unsupported or invalid social media link.")]
    UnsupportedUrl,
}

/// Client for the pretend metadata service.
#[derive(Debug, Clone)]
pub struct LookupClient {
    delay: Duration,
}

impl LookupClient {
    pub fn new(delay: Duration) -> Self {
        LookupClient { delay }
    }

    pub fn from_config(config: &SmdConfig) -> Self {
        LookupClient::new(Duration::from_millis(config.lookup_delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Resolves a link to its fabricated metadata.
    ///
    /// Unrecognized input fails before the delay; recognized input always
    /// succeeds after it.
    pub async fn lookup(&self, link: &str) -> Result<MediaInfo, LookupError> {
        let detection = platform::detect(link).ok_or(LookupError::UnsupportedUrl)?;
        tracing::debug!(
            "detected {} media {} in {:?}",
            detection.platform,
            detection.id,
            link
        );
        tokio::time::sleep(self.delay).await;
        let info = placeholder_info(detection.platform, &detection.id);
        tracing::info!("lookup resolved: {} {}", info.platform, info.id);
        Ok(info)
    }
}
