//! TikTok video link forms.

use url::Url;

/// Extracts the numeric video id from the last `video/<digits>` occurrence
/// anywhere in the path, e.g. `/@user/video/7123456789012345678`.
pub(super) fn media_id(url: &Url) -> Option<String> {
    let path = url.path();
    for (at, token) in path.rmatch_indices("video/") {
        let rest = &path[at + token.len()..];
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        if !digits.is_empty() {
            return Some(digits);
        }
    }
    None
}
