//! Video id extraction from user-submitted input.
//!
//! Users paste whatever their share sheet gives them: full watch URLs,
//! short links, embed URLs, or the bare 11-character id. All of them
//! funnel into the same append workflow.

use url::Url;

/// Length of every YouTube video id
const ID_LEN: usize = 11;

/// Extract a YouTube video id from a raw user submission.
///
/// Accepted shapes:
/// - bare id: `dQw4w9WgXcQ`
/// - watch URL: `https://www.youtube.com/watch?v=dQw4w9WgXcQ`
/// - short link: `https://youtu.be/dQw4w9WgXcQ`
/// - embed/legacy/shorts/live paths: `/embed/{id}`, `/v/{id}`,
///   `/shorts/{id}`, `/live/{id}`
///
/// Returns `None` when nothing in the input is a well-formed id.
/// Rejection is a normal validation outcome, not an error.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    if is_valid_id(input) {
        return Some(input.to_string());
    }

    let url = parse_url(input)?;
    let host = url.host_str()?;

    if host == "youtu.be" {
        let candidate = url.path_segments()?.next()?;
        return is_valid_id(candidate).then(|| candidate.to_string());
    }

    if !is_youtube_host(host) {
        return None;
    }

    // watch?v={id}
    if let Some((_, v)) = url.query_pairs().find(|(key, _)| key == "v") {
        if is_valid_id(&v) {
            return Some(v.into_owned());
        }
    }

    // /embed/{id}, /v/{id}, /shorts/{id}, /live/{id}
    let mut segments = url.path_segments()?;
    match segments.next()? {
        "embed" | "v" | "shorts" | "live" => {
            let candidate = segments.next()?;
            is_valid_id(candidate).then(|| candidate.to_string())
        }
        _ => None,
    }
}

/// Whether a candidate is exactly eleven characters of `[A-Za-z0-9_-]`
fn is_valid_id(candidate: &str) -> bool {
    candidate.len() == ID_LEN
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn is_youtube_host(host: &str) -> bool {
    host == "youtube.com"
        || host.ends_with(".youtube.com")
        || host == "youtube-nocookie.com"
        || host.ends_with(".youtube-nocookie.com")
}

/// Parse input as a URL, tolerating a missing scheme
fn parse_url(input: &str) -> Option<Url> {
    let url = match Url::parse(input) {
        Ok(url) => url,
        Err(_) if !input.contains("://") => Url::parse(&format!("https://{input}")).ok()?,
        Err(_) => return None,
    };

    matches!(url.scheme(), "http" | "https").then_some(url)
}
