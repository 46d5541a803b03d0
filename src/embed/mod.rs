pub mod html;
pub mod url;

use tracing::debug;

use self::html::{normalize_embed_html, NormalizedEmbed, IFRAME_RE};
use self::url::{classify_url, UrlClassifier};

/// Shape of a raw slot input, decided once before any rewriting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotInput<'a> {
    Blank,
    Iframe(&'a str),
    Url(&'a str),
}

impl<'a> SlotInput<'a> {
    pub fn classify(raw: Option<&'a str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Blank,
            Some(trimmed) if IFRAME_RE.is_match(trimmed) => Self::Iframe(trimmed),
            Some(trimmed) => Self::Url(trimmed),
        }
    }
}

/// Renderable form of one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedEmbed {
    SourceUrl(String),
    HtmlFragment(NormalizedEmbed),
    Empty,
}

impl ResolvedEmbed {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn source_url(&self) -> Option<&str> {
        match self {
            Self::SourceUrl(url) => Some(url),
            _ => None,
        }
    }

    pub fn fragment(&self) -> Option<&NormalizedEmbed> {
        match self {
            Self::HtmlFragment(embed) => Some(embed),
            _ => None,
        }
    }
}

/// Resolve a slot with the built-in provider table
pub fn resolve_slot(raw: Option<&str>) -> ResolvedEmbed {
    resolve_input(SlotInput::classify(raw), classify_url)
}

pub fn resolve_slot_with(classifier: &UrlClassifier, raw: Option<&str>) -> ResolvedEmbed {
    resolve_input(SlotInput::classify(raw), |url| classifier.classify(url))
}

fn resolve_input(input: SlotInput<'_>, classify: impl Fn(&str) -> String) -> ResolvedEmbed {
    let resolved = match input {
        SlotInput::Blank => ResolvedEmbed::Empty,
        SlotInput::Iframe(html) => normalize_embed_html(html)
            .map(ResolvedEmbed::HtmlFragment)
            .unwrap_or(ResolvedEmbed::Empty),
        SlotInput::Url(url) => match classify(url) {
            src if src.is_empty() => ResolvedEmbed::Empty,
            src => ResolvedEmbed::SourceUrl(src),
        },
    };
    debug!(?input, ?resolved, "resolved slot");
    resolved
}
