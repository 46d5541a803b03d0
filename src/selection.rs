use serde::Serialize;
use tracing::debug;

use crate::embed::ResolvedEmbed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySelection {
    Live,
    Replay,
    Empty,
}

impl DisplaySelection {
    /// Live wins whenever it resolved to anything, there is no memory of the previous pick
    pub fn select(live: &ResolvedEmbed, replay: &ResolvedEmbed) -> Self {
        let selection = if !live.is_empty() {
            Self::Live
        } else if !replay.is_empty() {
            Self::Replay
        } else {
            Self::Empty
        };
        debug!(selection = selection.as_str(), "selected talk slot");
        selection
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Replay => "replay",
            Self::Empty => "empty",
        }
    }

    /// Subtitle used when the section has no description of its own
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Live => "Streaming live now",
            Self::Replay => "Replay from the platform",
            Self::Empty => "No talk scheduled yet",
        }
    }

    /// Status line shown under the player
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Live => "Showing the live stream.",
            Self::Replay => "Showing the replay.",
            Self::Empty => "Nothing to play right now.",
        }
    }

    /// Pick the authoritative embed for this selection
    pub fn pick<'a>(&self, live: &'a ResolvedEmbed, replay: &'a ResolvedEmbed) -> &'a ResolvedEmbed {
        static EMPTY: ResolvedEmbed = ResolvedEmbed::Empty;
        match self {
            Self::Live => live,
            Self::Replay => replay,
            Self::Empty => &EMPTY,
        }
    }
}
