//! Source platform detection from pasted links.
//!
//! Scheme and host are validated once here, then each platform module
//! extracts its media id from the path/query. Detection never errors;
//! anything unrecognized is simply `None`.

mod instagram;
mod tiktok;
mod youtube;

use serde::Serialize;
use url::Url;

/// Platforms the simulated downloader recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    YouTube,
    Instagram,
    TikTok,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized link: the source platform plus the extracted media id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub platform: Platform,
    pub id: String,
}

/// Detects the source platform for a pasted link.
///
/// Accepts `http`/`https` links; a missing scheme is assumed to be `https`.
/// A single leading `www.` on the host is ignored. Returns `None` for
/// anything unrecognized (unparseable input, other hosts, malformed ids).
pub fn detect(input: &str) -> Option<Detection> {
    let url = parse_link(input)?;
    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let (platform, id) = match host {
        "youtube.com" | "youtu.be" => (Platform::YouTube, youtube::media_id(&url, host)?),
        "instagram.com" => (Platform::Instagram, instagram::media_id(&url)?),
        "tiktok.com" => (Platform::TikTok, tiktok::media_id(&url)?),
        _ => return None,
    };
    Some(Detection { platform, id })
}

/// Parse user input as an absolute http(s) URL, assuming `https` when the
/// scheme is missing.
fn parse_link(input: &str) -> Option<Url> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let url = if input.contains("://") {
        Url::parse(input).ok()?
    } else {
        Url::parse(&format!("https://{}", input)).ok()?
    };
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

/// Length of the leading run of media-id characters (`[A-Za-z0-9_-]`).
/// The run is all-ASCII, so the count is also a valid byte offset.
fn id_run_len(s: &str) -> usize {
    s.chars()
        .take_while(|&c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        .count()
}
