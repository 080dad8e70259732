/// Hostname, favicon and title helpers for bookmark rows and graph labels
use url::Url;

const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons?domain=";

/// Extract the hostname of a bookmark URL
///
/// Falls back to the input unchanged when it cannot be parsed or has no host
/// (e.g. `javascript:` bookmarklets), so rows always have something to show.
///
/// Examples:
/// - https://www.google.com/search → www.google.com
/// - http://localhost:3000/app → localhost
/// - not a url → not a url
pub fn hostname(url: &str) -> String {
    Url::parse(url.trim())
        .ok()
        .and_then(|parsed| parsed.host_str().map(|host| host.to_string()))
        .unwrap_or_else(|| url.to_string())
}

/// Favicon image URL for a bookmark
pub fn favicon_url(url: &str) -> String {
    format!("{}{}", FAVICON_SERVICE, hostname(url))
}

/// Shorten a title to `max` characters, appending "..." when it was cut
pub fn truncate_title(title: &str, max: usize) -> String {
    if title.chars().count() <= max {
        return title.to_string();
    }

    let mut shortened: String = title.chars().take(max).collect();
    shortened.push_str("...");
    shortened
}
