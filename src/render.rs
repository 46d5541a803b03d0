use serde::Serialize;

use crate::embed::url::UrlClassifier;
use crate::embed::{resolve_slot_with, ResolvedEmbed};
use crate::layout::LayoutDescriptor;
use crate::selection::DisplaySelection;

static IFRAME_ALLOW: &str = "autoplay; encrypted-media; picture-in-picture";
static IFRAME_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%;border:0;";
static PLACEHOLDER_TITLE: &str = "No talk yet";
static PLACEHOLDER_HINT: &str = "Please check back later or browse our other content.";

/// Everything the page needs to draw the talk player
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDescriptor {
    pub state: DisplaySelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iframe_src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_html: Option<String>,
    pub layout: LayoutDescriptor,
}

impl RenderDescriptor {
    fn from_slots(live: ResolvedEmbed, replay: ResolvedEmbed) -> Self {
        let state = DisplaySelection::select(&live, &replay);
        let selected = state.pick(&live, &replay);
        Self {
            state,
            iframe_src: selected.source_url().map(String::from),
            fragment_html: selected.fragment().map(|embed| embed.html.clone()),
            layout: LayoutDescriptor::compute(selected),
        }
    }

    /// Player markup: the sized container holding an iframe, the embed fragment, or a
    /// placeholder. Fragments are inserted verbatim, they are authored by administrators.
    pub fn player_html(&self, title: &str) -> String {
        let mut html = String::new();
        html.push_str(&format!(
            "<div class=\"talk-player talk-player--{}\" style=\"{}\">",
            self.state.as_str(),
            self.layout.container_style()
        ));
        match (&self.iframe_src, &self.fragment_html) {
            (Some(src), _) => {
                html.push_str(&format!(
                    "<iframe src=\"{}\" title=\"{}\" style=\"{}\" loading=\"lazy\" referrerpolicy=\"strict-origin-when-cross-origin\" allow=\"{}\" allowfullscreen></iframe>",
                    html_escape(src),
                    html_escape(title),
                    IFRAME_STYLE,
                    IFRAME_ALLOW
                ));
            }
            (None, Some(fragment)) => html.push_str(fragment),
            (None, None) => {
                html.push_str("<div class=\"talk-player__placeholder\">");
                html.push_str(&format!("<p>{}</p>", PLACEHOLDER_TITLE));
                html.push_str(&format!("<p>{}</p>", PLACEHOLDER_HINT));
                html.push_str("</div>");
            }
        }
        html.push_str("</div>");
        html.push_str(&format!(
            "<p class=\"talk-player__caption\">{}</p>",
            self.state.caption()
        ));
        html
    }

    /// The whole talk section: heading, subtitle and player
    pub fn section_html(&self, title: &str, description: Option<&str>) -> String {
        let subtitle = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| self.state.headline());
        let mut html = String::new();
        html.push_str("<section id=\"talk\" class=\"talk-section\">");
        html.push_str(&format!("<h2>{}</h2>", html_escape(title)));
        html.push_str(&format!("<p>{}</p>", html_escape(subtitle)));
        html.push_str(&self.player_html(title));
        html.push_str("</section>");
        html
    }
}

/// Run the whole pipeline with the built-in provider table
pub fn render(live: Option<&str>, replay: Option<&str>) -> RenderDescriptor {
    render_with(&UrlClassifier::default(), live, replay)
}

pub fn render_with(
    classifier: &UrlClassifier,
    live: Option<&str>,
    replay: Option<&str>,
) -> RenderDescriptor {
    RenderDescriptor::from_slots(
        resolve_slot_with(classifier, live),
        resolve_slot_with(classifier, replay),
    )
}

/// Caches the descriptor for the last pair of inputs
pub struct TalkRenderer {
    classifier: UrlClassifier,
    cached: Option<(Option<Box<str>>, Option<Box<str>>, RenderDescriptor)>,
}

impl Default for TalkRenderer {
    fn default() -> Self {
        Self::new(UrlClassifier::default())
    }
}

impl TalkRenderer {
    pub fn new(classifier: UrlClassifier) -> Self {
        Self {
            classifier,
            cached: None,
        }
    }

    pub fn is_cached(&self, live: Option<&str>, replay: Option<&str>) -> bool {
        matches!(&self.cached, Some((l, r, _)) if l.as_deref() == live && r.as_deref() == replay)
    }

    pub fn render(&mut self, live: Option<&str>, replay: Option<&str>) -> &RenderDescriptor {
        if !self.is_cached(live, replay) {
            self.cached = None;
        }
        let (_, _, descriptor) = self.cached.get_or_insert_with(|| {
            (
                live.map(Into::into),
                replay.map(Into::into),
                render_with(&self.classifier, live, replay),
            )
        });
        descriptor
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
