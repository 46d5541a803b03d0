use once_cell::sync::Lazy;
use regex::Regex;

/// Style forced onto an iframe so it fills a `position: relative` parent
pub static FILL_PARENT_STYLE: &str =
    "border:none;overflow:hidden;position:absolute;top:0;left:0;width:100%;height:100%;";

pub(crate) static IFRAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<iframe[\s>]").unwrap());

static IFRAME_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<iframe").unwrap());
static WIDTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)width="(?P<px>\d+)""#).unwrap());
static HEIGHT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)height="(?P<px>\d+)""#).unwrap());
static WIDTH_ATTR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)width="[^"]*""#).unwrap());
static HEIGHT_ATTR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)height="[^"]*""#).unwrap());
static STYLE_ATTR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)style="[^"]*""#).unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEmbed {
    pub html: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl NormalizedEmbed {
    /// Intrinsic aspect ratio, known only when both dimensions were declared
    pub fn ratio(&self) -> Option<f64> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(f64::from(width) / f64::from(height)),
            _ => None,
        }
    }

    pub fn is_iframe(&self) -> bool {
        IFRAME_RE.is_match(&self.html)
    }
}

/// First declared pixel value of an attribute, zero counts as undeclared
fn declared_px(re: &Regex, html: &str) -> Option<u32> {
    re.captures(html)
        .and_then(|cap| cap.name("px").unwrap().as_str().parse().ok())
        .filter(|px| *px > 0)
}

/// Make an embed snippet fill its container, keeping the declared size as metadata.
///
/// Only the first `width`, `height` and `style` attributes are rewritten. Markup without an
/// iframe is passed through untouched apart from trimming.
pub fn normalize_embed_html(html: &str) -> Option<NormalizedEmbed> {
    let trimmed = html.trim();
    if trimmed.is_empty() {
        return None;
    }

    let width = declared_px(&WIDTH_RE, trimmed);
    let height = declared_px(&HEIGHT_RE, trimmed);

    if !IFRAME_RE.is_match(trimmed) {
        return Some(NormalizedEmbed {
            html: trimmed.to_owned(),
            width,
            height,
        });
    }

    let normalized = WIDTH_ATTR_RE.replace(trimmed, r#"width="100%""#);
    let normalized = HEIGHT_ATTR_RE.replace(&normalized, r#"height="100%""#);
    let style = format!(r#"style="{}""#, FILL_PARENT_STYLE);
    let normalized = if STYLE_ATTR_RE.is_match(&normalized) {
        STYLE_ATTR_RE.replace(&normalized, style.as_str()).into_owned()
    } else {
        IFRAME_OPEN_RE
            .replace(&normalized, format!("<iframe {}", style).as_str())
            .into_owned()
    };

    Some(NormalizedEmbed {
        html: normalized,
        width,
        height,
    })
}
