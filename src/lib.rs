//! Resolves the two administrator-edited talk slots, live and replay, into something a page
//! can render: an iframe source or a normalized embed fragment, which slot to show, and how
//! to size the player.

pub mod config;
pub mod embed;
pub mod error;
pub mod layout;
pub mod render;
pub mod selection;

pub use embed::html::{normalize_embed_html, NormalizedEmbed};
pub use embed::url::{classify_url, Provider, UrlClassifier};
pub use embed::{resolve_slot, resolve_slot_with, ResolvedEmbed, SlotInput};
pub use layout::LayoutDescriptor;
pub use render::{render, render_with, RenderDescriptor, TalkRenderer};
pub use selection::DisplaySelection;
