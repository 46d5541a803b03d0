//! Rewrites bare provider links into urls that can be used as an iframe `src`.
//!
//! Providers are tried in table order and the first one whose pattern matches the input
//! decides the result. A provider that matches but cannot rewrite leaves the input as is.
//! Inputs no provider recognizes are returned unchanged and attempted as a direct `src`.

mod facebook;
mod vimeo;
mod youtube;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::error::EmbedError;

/// Returns the rewritten url, or `None` to keep the input unchanged
pub type Rewrite = fn(&str) -> Option<String>;

pub struct Provider {
    name: Box<str>,
    pattern: Regex,
    rewrite: Rewrite,
}

impl Provider {
    pub fn new(name: impl Into<Box<str>>, pattern: Regex, rewrite: Rewrite) -> Self {
        Self {
            name: name.into(),
            pattern,
            rewrite,
        }
    }

    /// A provider whose urls are already embeddable
    pub fn passthrough(name: impl Into<Box<str>>, pattern: Regex) -> Self {
        Self::new(name, pattern, |input| Some(input.to_owned()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

pub struct UrlClassifier {
    providers: Vec<Provider>,
}

impl Default for UrlClassifier {
    fn default() -> Self {
        Self {
            providers: vec![
                Provider::new("youtube", youtube::WATCH_RE.clone(), youtube::watch),
                Provider::new("youtube-short", youtube::SHORT_RE.clone(), youtube::short),
                Provider::passthrough("facebook-plugin", facebook::PLUGIN_RE.clone()),
                Provider::new("facebook", facebook::VIDEO_RE.clone(), facebook::video),
                Provider::new("facebook-short", facebook::SHORT_RE.clone(), facebook::short),
                Provider::passthrough("vimeo-player", vimeo::PLAYER_RE.clone()),
            ],
        }
    }
}

impl UrlClassifier {
    /// Append a provider, it is tried after every provider already in the table
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.providers.push(provider);
        self
    }

    /// Append a pass-through provider for an extra player host pattern
    pub fn with_passthrough(self, pattern: &str) -> Result<Self, EmbedError> {
        let regex = Regex::new(pattern).map_err(|source| EmbedError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(self.with_provider(Provider::passthrough(pattern, regex)))
    }

    pub fn providers(&self) -> impl Iterator<Item = &Provider> {
        self.providers.iter()
    }

    /// Classify a trimmed, non-empty input that is not an iframe snippet
    pub fn classify(&self, input: &str) -> String {
        let Some(provider) = self.providers.iter().find(|p| p.pattern.is_match(input)) else {
            trace!(input, "no provider matched, using input as player url");
            return input.to_owned();
        };
        match (provider.rewrite)(input) {
            Some(url) => {
                debug!(provider = provider.name(), input, url = %url, "resolved player url");
                url
            }
            None => {
                debug!(provider = provider.name(), input, "provider could not rewrite url");
                input.to_owned()
            }
        }
    }
}

static DEFAULT_CLASSIFIER: Lazy<UrlClassifier> = Lazy::new(UrlClassifier::default);

/// Classify with the built-in provider table
pub fn classify_url(input: &str) -> String {
    DEFAULT_CLASSIFIER.classify(input)
}

#[cfg(test)]
mod test {
    use super::*;

    static SHAPES: &[&str] = &[
        "https://www.youtube.com/watch?v=abc123",
        "https://www.youtube.com/watch?list=PL1",
        "https://youtu.be/xyz789?t=5",
        "https://www.facebook.com/plugins/video.php?href=https%3A%2F%2Fwww.facebook.com%2Freel%2F1&show_text=false",
        "https://www.facebook.com/somepage/videos/123456/",
        "https://www.facebook.com/reel/818742077735961",
        "https://www.facebook.com/watch/?v=42",
        "https://fb.watch/abcXYZ/",
        "https://player.vimeo.com/video/76979871",
        "https://example.com/stream/live",
    ];

    #[test]
    fn test_rules() {
        assert_eq!(
            "https://www.youtube.com/embed/abc123",
            classify_url("https://www.youtube.com/watch?v=abc123")
        );
        assert_eq!(
            "https://www.youtube.com/embed/xyz789",
            classify_url("https://youtu.be/xyz789?t=5")
        );
        assert!(classify_url("https://fb.watch/abcXYZ/")
            .starts_with("https://www.facebook.com/plugins/video.php?href="));
        assert!(classify_url("https://www.facebook.com/somepage/videos/123456/")
            .starts_with("https://www.facebook.com/plugins/video.php?href="));
    }

    #[test]
    fn test_unchanged() {
        for input in [
            "https://www.youtube.com/watch?list=PL1",
            "https://www.facebook.com/plugins/video.php?href=x",
            "https://player.vimeo.com/video/76979871",
            "https://example.com/stream/live",
            "not a url at all",
            "https://fb.watch/",
        ] {
            assert_eq!(input, classify_url(input));
        }
    }

    #[test]
    fn test_idempotent() {
        for input in SHAPES {
            let once = classify_url(input);
            assert_eq!(once, classify_url(&once), "{}", input);
        }
    }

    #[test]
    fn test_first_match_wins() {
        // matched by the watch rule, which cannot find an id
        let input = "https://www.youtube.com/watch?feature=youtu.be/abc";
        assert_eq!(input, classify_url(input));
    }

    #[test]
    fn test_passthrough_extension() {
        let classifier = UrlClassifier::default()
            .with_passthrough(r"(?i)dailymotion\.com/embed/")
            .unwrap();
        let input = "https://www.dailymotion.com/embed/video/x8abc";
        assert_eq!(input, classifier.classify(input));
        assert_eq!(7, classifier.providers().count());
        assert_eq!(
            "https://www.youtube.com/embed/abc123",
            classifier.classify("https://www.youtube.com/watch?v=abc123")
        );
    }

    #[test]
    fn test_custom_rewrite() {
        let classifier = UrlClassifier::default().with_provider(Provider::new(
            "vimeo",
            Regex::new(r"^https://vimeo\.com/\d+$").unwrap(),
            |input| {
                input
                    .rsplit('/')
                    .next()
                    .map(|id| format!("https://player.vimeo.com/video/{}", id))
            },
        ));
        assert_eq!(
            "https://player.vimeo.com/video/76979871",
            classifier.classify("https://vimeo.com/76979871")
        );
    }

    #[test]
    fn test_invalid_pattern() {
        let err = UrlClassifier::default().with_passthrough("(unclosed").err().unwrap();
        assert!(matches!(err, EmbedError::InvalidPattern { .. }));
    }
}
