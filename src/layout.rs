use serde::Serialize;

use crate::embed::ResolvedEmbed;

pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Sizing for the player container.
///
/// Without a fixed box the container is a responsive percentage-padding box. With one, the
/// declared pixel size of the embed is used as is and the box is centered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDescriptor {
    pub aspect_ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_width_px: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_height_px: Option<u32>,
}

impl Default for LayoutDescriptor {
    fn default() -> Self {
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            box_width_px: None,
            box_height_px: None,
        }
    }
}

impl LayoutDescriptor {
    pub fn compute(selected: &ResolvedEmbed) -> Self {
        match selected {
            ResolvedEmbed::HtmlFragment(embed) => match (embed.width, embed.height) {
                (Some(width), Some(height)) => Self {
                    aspect_ratio: f64::from(width) / f64::from(height),
                    box_width_px: Some(width),
                    box_height_px: Some(height),
                },
                _ => Self::default(),
            },
            ResolvedEmbed::SourceUrl(_) | ResolvedEmbed::Empty => Self::default(),
        }
    }

    pub fn fixed_box(&self) -> Option<(u32, u32)> {
        self.box_width_px.zip(self.box_height_px)
    }

    /// Top padding, as a percentage of the width, that gives the container its ratio
    pub fn padding_top_percent(&self) -> f64 {
        100.0 / self.aspect_ratio
    }

    /// Inline CSS for the container, which is always `position: relative` with a height
    pub fn container_style(&self) -> String {
        match self.fixed_box() {
            Some((width, height)) => format!(
                "position:relative;width:{width}px;max-width:{width}px;height:{height}px;margin-left:auto;margin-right:auto;"
            ),
            None => format!(
                "position:relative;width:100%;padding-top:{}%;",
                trim_float(self.padding_top_percent())
            ),
        }
    }
}

/// Format with up to four decimals and no trailing zeros
fn trim_float(value: f64) -> String {
    let formatted = format!("{:.4}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}
