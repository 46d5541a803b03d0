use once_cell::sync::Lazy;
use regex::Regex;

pub(super) static PLAYER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)player\.vimeo\.com/video/").unwrap());
