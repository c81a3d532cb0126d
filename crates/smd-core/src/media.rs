//! Fabricated media metadata and the mock download tables.
//!
//! Nothing here touches the network: titles are canned per platform,
//! thumbnails point at public placeholder services seeded with the media id,
//! and the download tables are fixed lists that lead nowhere.

use serde::Serialize;

use crate::platform::Platform;

/// Broad shape of the media behind a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Image => "image",
        }
    }

    /// Mock download table for this kind of media.
    pub fn download_options(self) -> &'static [DownloadOption] {
        match self {
            MediaKind::Video => &VIDEO_DOWNLOAD_OPTIONS,
            MediaKind::Image => &IMAGE_DOWNLOAD_OPTIONS,
        }
    }
}

/// Metadata for a detected link, shaped like a real lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaInfo {
    pub id: String,
    pub platform: Platform,
    #[serde(rename = "mediaType")]
    pub kind: MediaKind,
    pub title: String,
    pub thumbnail: String,
}

/// One row of a mock download table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DownloadOption {
    pub format: &'static str,
    /// Container/file type, serialized under the key `type`.
    #[serde(rename = "type")]
    pub container: &'static str,
}

pub const VIDEO_DOWNLOAD_OPTIONS: [DownloadOption; 4] = [
    DownloadOption { format: "1080p", container: "MP4" },
    DownloadOption { format: "720p", container: "MP4" },
    DownloadOption { format: "480p", container: "MP4" },
    DownloadOption { format: "Audio", container: "MP3" },
];

pub const IMAGE_DOWNLOAD_OPTIONS: [DownloadOption; 4] = [
    DownloadOption { format: "High-Res", container: "JPG" },
    DownloadOption { format: "Standard", container: "JPG" },
    DownloadOption { format: "WebP", container: "WEBP" },
    DownloadOption { format: "Original", container: "PNG" },
];

/// Fabricates the canned metadata for a detected media id.
pub fn placeholder_info(platform: Platform, id: &str) -> MediaInfo {
    let (kind, title, thumbnail) = match platform {
        Platform::YouTube => (
            MediaKind::Video,
            "Your Awesome YouTube Video Title Goes Here",
            format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", id),
        ),
        Platform::Instagram => (
            MediaKind::Image,
            "This is a beautiful post from Instagram!",
            format!("https://picsum.photos/seed/{}/400/300", id),
        ),
        Platform::TikTok => (
            MediaKind::Video,
            "Check out this viral TikTok video!",
            format!("https://picsum.photos/seed/{}/300/400", id),
        ),
    };
    MediaInfo {
        id: id.to_string(),
        platform,
        kind,
        title: title.to_string(),
        thumbnail,
    }
}
