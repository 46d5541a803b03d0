use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static PLUGIN_ENDPOINT: &str = "https://www.facebook.com/plugins/video.php";
static PLUGIN_WIDTH: &str = "560";

pub(super) static PLUGIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)facebook\.com/plugins/video\.php").unwrap());
pub(super) static VIDEO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)facebook\.com/(?:.+/videos/|reel/|watch/?\?)").unwrap()
});
pub(super) static SHORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)fb\.watch/+(?P<id>[^/?&#\s]*)").unwrap());

/// Wrap an absolute video url in the video plugin endpoint
fn plugin_url(href: &Url) -> Option<String> {
    Url::parse_with_params(
        PLUGIN_ENDPOINT,
        &[
            ("href", href.as_str()),
            ("show_text", "false"),
            ("width", PLUGIN_WIDTH),
        ],
    )
    .ok()
    .map(String::from)
}

/// Page video, reel and watch links
pub(super) fn video(input: &str) -> Option<String> {
    let href = Url::parse(input).ok()?;
    plugin_url(&href)
}

/// `fb.watch/<id>` short links are expanded to a watch url before wrapping
pub(super) fn short(input: &str) -> Option<String> {
    let id = SHORT_RE
        .captures(input)
        .map(|cap| cap.name("id").unwrap())
        .filter(|id| !id.as_str().is_empty())?;
    let mut watch = Url::parse("https://www.facebook.com/watch/").ok()?;
    watch.query_pairs_mut().append_pair("v", id.as_str());
    plugin_url(&watch)
}
