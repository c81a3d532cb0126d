//! YouTube link forms and media id extraction.

use url::Url;

use super::id_run_len;

/// YouTube media ids are exactly 11 characters of `[A-Za-z0-9_-]`.
const ID_LEN: usize = 11;

/// Extracts the media id from a `youtube.com` or `youtu.be` URL.
///
/// Recognized shapes, tried in order: deep paths (`/<a>/<b>/<id>`),
/// `/v/<id>`, `/e/<id>`, `/embed/<id>`, and a `v=<id>` query parameter on
/// any path. `youtu.be/<id>` takes the first path segment. A candidate
/// segment must start with at least 11 id characters; anything after those
/// 11 is ignored.
pub(super) fn media_id(url: &Url, host: &str) -> Option<String> {
    if host == "youtu.be" {
        let first = url.path_segments()?.next()?;
        return id_prefix(first);
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|p| !p.is_empty()).collect())
        .unwrap_or_default();

    // Deep path: id at the third segment or later.
    if segments.len() >= 3 {
        for seg in &segments[2..] {
            if let Some(id) = id_prefix(seg) {
                return Some(id);
            }
        }
    }

    if segments.len() >= 2 && matches!(segments[0], "v" | "e" | "embed") {
        if let Some(id) = id_prefix(segments[1]) {
            return Some(id);
        }
    }

    for (key, value) in url.query_pairs() {
        if key == "v" {
            if let Some(id) = id_prefix(&value) {
                return Some(id);
            }
        }
    }
    None
}

/// First 11 characters of the segment, if its leading id-character run is
/// long enough.
fn id_prefix(segment: &str) -> Option<String> {
    if id_run_len(segment) >= ID_LEN {
        Some(segment[..ID_LEN].to_string())
    } else {
        None
    }
}
