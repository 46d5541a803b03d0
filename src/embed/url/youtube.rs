use once_cell::sync::Lazy;
use regex::Regex;

pub(super) static WATCH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)youtube\.com/watch\?").unwrap());
pub(super) static SHORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)youtu\.be/+(?P<id>[^/?&#\s]*)").unwrap());

static VIDEO_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?&]v=(?P<id>[^&#\s]+)").unwrap());

fn embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", id)
}

/// `youtube.com/watch?v=<id>`, the `v` parameter may appear anywhere in the query
pub(super) fn watch(input: &str) -> Option<String> {
    VIDEO_ID_RE
        .captures(input)
        .map(|cap| cap.name("id").unwrap())
        .map(|id| embed_url(id.as_str()))
}

/// `youtu.be/<id>`, trailing query and fragment are dropped
pub(super) fn short(input: &str) -> Option<String> {
    SHORT_RE
        .captures(input)
        .map(|cap| cap.name("id").unwrap())
        .filter(|id| !id.as_str().is_empty())
        .map(|id| embed_url(id.as_str()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_watch() {
        assert_eq!(
            Some("https://www.youtube.com/embed/abc123".into()),
            watch("https://www.youtube.com/watch?v=abc123")
        );
        assert_eq!(
            Some("https://www.youtube.com/embed/abc123".into()),
            watch("https://m.youtube.com/watch?feature=share&v=abc123&t=42")
        );
        assert_eq!(None, watch("https://www.youtube.com/watch?list=PL123"));
        assert_eq!(None, watch("https://www.youtube.com/watch?v="));
    }

    #[test]
    fn test_short() {
        assert_eq!(
            Some("https://www.youtube.com/embed/xyz789".into()),
            short("https://youtu.be/xyz789?t=5")
        );
        assert_eq!(
            Some("https://www.youtube.com/embed/xyz789".into()),
            short("https://youtu.be/xyz789/")
        );
        assert_eq!(None, short("https://youtu.be/"));
    }

    #[test]
    fn test_patterns() {
        assert!(WATCH_RE.is_match("https://www.YouTube.com/watch?v=abc"));
        assert!(!WATCH_RE.is_match("https://www.youtube.com/embed/abc"));
        assert!(SHORT_RE.is_match("youtu.be/abc"));
    }
}
