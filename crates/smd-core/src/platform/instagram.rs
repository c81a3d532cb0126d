//! Instagram post/reel link forms.

use url::Url;

use super::id_run_len;

/// Extracts the shortcode from `/p/<code>` or `/reel/<code>` paths.
///
/// The code is the maximal non-empty leading run of `[A-Za-z0-9_-]` in the
/// segment after `p`/`reel`; anything else in that segment is ignored.
pub(super) fn media_id(url: &Url) -> Option<String> {
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    match segments.next()? {
        "p" | "reel" => {}
        _ => return None,
    }
    let candidate = segments.next()?;
    let run = id_run_len(candidate);
    if run == 0 {
        None
    } else {
        Some(candidate[..run].to_string())
    }
}
